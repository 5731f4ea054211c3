use crate::model::{EntityType, Id, RecordStatus};
use serde::{Deserialize, Serialize};

/// A catalog item: a component, system, API or resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub description: String,
    pub owner: String,
    pub repository: String,
    pub status: RecordStatus,
    pub version: String,
    /// Free-text human-readable time, e.g. "2 hours ago"
    pub last_updated: String,
    /// Names of other entities, matched by fuzzy containment rather than id
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl MetadataEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Raw values captured by the creation form
///
/// `dependencies` and `tags` are the comma-separated text inputs; blank
/// strings mean the user left the input empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityForm {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub description: String,
    pub owner: String,
    #[serde(default)]
    pub repository: String,
    pub status: RecordStatus,
    pub version: String,
    #[serde(default)]
    pub dependencies: String,
    #[serde(default)]
    pub tags: String,
}

impl EntityForm {
    /// Blank form pre-filled the way the create dialog opens
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            name: String::new(),
            entity_type,
            description: String::new(),
            owner: String::new(),
            repository: String::new(),
            status: RecordStatus::Active,
            version: "v1.0.0".to_string(),
            dependencies: String::new(),
            tags: String::new(),
        }
    }
}
