use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Id = String;

/// Sentinel written into `lastUpdated` for records created during the session
pub const JUST_NOW: &str = "Just now";

pub fn generate_id() -> Id {
    Uuid::new_v4().to_string()
}

/// Millisecond timestamp id, the scheme used for entities created from the form
pub fn timestamp_id() -> Id {
    chrono::Utc::now().timestamp_millis().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Service,
    Website,
    Library,
    Api,
}

impl EntityType {
    pub const ALL: [EntityType; 4] = [
        EntityType::Service,
        EntityType::Website,
        EntityType::Library,
        EntityType::Api,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Service => "service",
            EntityType::Website => "website",
            EntityType::Library => "library",
            EntityType::Api => "api",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for EntityType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "service" => Ok(EntityType::Service),
            "website" => Ok(EntityType::Website),
            "library" => Ok(EntityType::Library),
            "api" => Ok(EntityType::Api),
            _ => Err(CatalogError::invalid("type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Inactive,
    Deprecated,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 3] = [
        RecordStatus::Active,
        RecordStatus::Inactive,
        RecordStatus::Deprecated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
            RecordStatus::Deprecated => "deprecated",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for RecordStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(RecordStatus::Active),
            "inactive" => Ok(RecordStatus::Inactive),
            "deprecated" => Ok(RecordStatus::Deprecated),
            _ => Err(CatalogError::invalid("status", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Team,
    Squad,
    Guild,
}

impl GroupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupType::Team => "team",
            GroupType::Squad => "squad",
            GroupType::Guild => "guild",
        }
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for GroupType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "team" => Ok(GroupType::Team),
            "squad" => Ok(GroupType::Squad),
            "guild" => Ok(GroupType::Guild),
            _ => Err(CatalogError::invalid("group type", s)),
        }
    }
}
