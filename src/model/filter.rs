use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

pub const ALL_ORGANIZATIONS: &str = "All Organizations";
pub const DEFAULT_ORGANIZATION: &str = "Engineering Team";

/// Exact-match constraint on an optional string field; `"all"` is unconstrained
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueFilter {
    #[default]
    All,
    Only(String),
}

impl ValueFilter {
    pub fn only(value: impl Into<String>) -> Self {
        ValueFilter::Only(value.into())
    }

    /// Absent fields pass, present fields must equal the constraint
    pub fn accepts(&self, field: Option<&str>) -> bool {
        match (self, field) {
            (ValueFilter::All, _) => true,
            (ValueFilter::Only(_), None) => true,
            (ValueFilter::Only(expected), Some(actual)) => actual == expected,
        }
    }
}

impl From<String> for ValueFilter {
    fn from(value: String) -> Self {
        if value == "all" {
            ValueFilter::All
        } else {
            ValueFilter::Only(value)
        }
    }
}

impl From<&str> for ValueFilter {
    fn from(value: &str) -> Self {
        ValueFilter::from(value.to_string())
    }
}

impl From<ValueFilter> for String {
    fn from(filter: ValueFilter) -> Self {
        match filter {
            ValueFilter::All => "all".to_string(),
            ValueFilter::Only(value) => value,
        }
    }
}

/// Organizational scope chosen in the header switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrgScope {
    AllOrganizations,
    Named(String),
}

impl OrgScope {
    pub fn named(name: impl Into<String>) -> Self {
        OrgScope::Named(name.into())
    }

    /// A record is in scope when its owner contains the scope name with the
    /// trailing " Team" stripped, or its team equals the scope name exactly.
    /// Records with neither field are always in scope.
    pub fn accepts(&self, owner: Option<&str>, team: Option<&str>) -> bool {
        let scope = match self {
            OrgScope::AllOrganizations => return true,
            OrgScope::Named(scope) => scope,
        };
        if owner.is_none() && team.is_none() {
            return true;
        }
        let org = scope.strip_suffix(" Team").unwrap_or(scope);
        owner.is_some_and(|owner| owner.contains(org))
            || team.is_some_and(|team| team == scope)
    }
}

impl Default for OrgScope {
    fn default() -> Self {
        OrgScope::Named(DEFAULT_ORGANIZATION.to_string())
    }
}

impl From<String> for OrgScope {
    fn from(value: String) -> Self {
        if value == ALL_ORGANIZATIONS {
            OrgScope::AllOrganizations
        } else {
            OrgScope::Named(value)
        }
    }
}

impl From<&str> for OrgScope {
    fn from(value: &str) -> Self {
        OrgScope::from(value.to_string())
    }
}

impl From<OrgScope> for String {
    fn from(scope: OrgScope) -> Self {
        match scope {
            OrgScope::AllOrganizations => ALL_ORGANIZATIONS.to_string(),
            OrgScope::Named(name) => name,
        }
    }
}

impl std::fmt::Display for OrgScope {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrgScope::AllOrganizations => f.write_str(ALL_ORGANIZATIONS),
            OrgScope::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Updated,
    Owner,
}

impl std::str::FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "updated" => Ok(SortKey::Updated),
            "owner" => Ok(SortKey::Owner),
            _ => Err(CatalogError::invalid("sort", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(CatalogError::invalid("sort order", s)),
        }
    }
}

/// Query parameters driving the main list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: ValueFilter,
    #[serde(default, rename = "type")]
    pub record_type: ValueFilter,
    #[serde(default)]
    pub org: OrgScope,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
}

/// Multi-valued criteria from the advanced search panel; empty lists are
/// unconstrained
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub has_repository: bool,
    #[serde(default)]
    pub has_dependencies: bool,
}

impl AdvancedFilter {
    pub fn is_empty(&self) -> bool {
        *self == AdvancedFilter::default()
    }
}
