use crate::model::Id;
use serde::{Deserialize, Serialize};

/// Scaffolding template for new components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub language: String,
    pub framework: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    pub downloads: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
}
