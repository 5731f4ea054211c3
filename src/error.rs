use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A string could not be parsed into one of the catalog's value enums
    #[error("invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("unknown view: {0}")]
    UnknownView(String),

    /// A required form field was left blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("duplicate id {id} in {view}")]
    DuplicateId { view: String, id: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        CatalogError::InvalidValue {
            field,
            value: value.into(),
        }
    }
}
