use crate::model::{GroupType, Id, RecordStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub role: String,
    pub team: String,
    #[serde(default)]
    pub avatar: String,
    pub description: String,
    pub joined_at: String,
    pub last_active: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub team: String,
    /// Head count, not a list of member ids
    pub members: u32,
    pub lead: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    #[serde(default)]
    pub projects: Vec<String>,
}

/// A business domain; `systems` are system names, not ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub owner: String,
    #[serde(default)]
    pub systems: Vec<String>,
    pub status: RecordStatus,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
