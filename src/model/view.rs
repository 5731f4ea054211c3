use crate::error::CatalogError;
use crate::model::{EntityType, RecordKind};
use serde::{Deserialize, Serialize};

/// Top-level browsing context; selects the active collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Components,
    Systems,
    Apis,
    Resources,
    Domains,
    Groups,
    Users,
    Templates,
}

/// Presentation labels for a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub breadcrumb: (&'static str, &'static str),
    pub create_label: &'static str,
}

impl ViewType {
    pub const ALL: [ViewType; 8] = [
        ViewType::Components,
        ViewType::Systems,
        ViewType::Apis,
        ViewType::Resources,
        ViewType::Domains,
        ViewType::Groups,
        ViewType::Users,
        ViewType::Templates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Components => "components",
            ViewType::Systems => "systems",
            ViewType::Apis => "apis",
            ViewType::Resources => "resources",
            ViewType::Domains => "domains",
            ViewType::Groups => "groups",
            ViewType::Users => "users",
            ViewType::Templates => "templates",
        }
    }

    pub fn record_kind(&self) -> RecordKind {
        match self {
            ViewType::Components | ViewType::Systems | ViewType::Apis | ViewType::Resources => {
                RecordKind::Entity
            }
            ViewType::Domains => RecordKind::Domain,
            ViewType::Groups => RecordKind::Group,
            ViewType::Users => RecordKind::User,
            ViewType::Templates => RecordKind::Template,
        }
    }

    pub fn is_entity_view(&self) -> bool {
        self.record_kind() == RecordKind::Entity
    }

    /// Type pre-selected in the creation form, `None` outside entity views
    pub fn default_entity_type(&self) -> Option<EntityType> {
        match self {
            ViewType::Components | ViewType::Systems => Some(EntityType::Service),
            ViewType::Apis => Some(EntityType::Api),
            ViewType::Resources => Some(EntityType::Library),
            ViewType::Domains | ViewType::Groups | ViewType::Users | ViewType::Templates => None,
        }
    }

    pub fn config(&self) -> ViewConfig {
        match self {
            ViewType::Components => ViewConfig {
                title: "Components",
                description: "Software components tracked in the Engineering Team catalog",
                breadcrumb: ("Catalog", "Components"),
                create_label: "Create Component",
            },
            ViewType::Systems => ViewConfig {
                title: "Systems",
                description: "System architectures and platforms in your organization",
                breadcrumb: ("Catalog", "Systems"),
                create_label: "Create System",
            },
            ViewType::Apis => ViewConfig {
                title: "APIs",
                description: "API endpoints and services available in your ecosystem",
                breadcrumb: ("Catalog", "APIs"),
                create_label: "Create API",
            },
            ViewType::Resources => ViewConfig {
                title: "Resources",
                description: "Infrastructure resources and databases",
                breadcrumb: ("Catalog", "Resources"),
                create_label: "Create Resource",
            },
            ViewType::Domains => ViewConfig {
                title: "Domains",
                description: "Business domains and organizational boundaries",
                breadcrumb: ("Organization", "Domains"),
                create_label: "Create Domain",
            },
            ViewType::Groups => ViewConfig {
                title: "Groups",
                description: "Teams and organizational groups",
                breadcrumb: ("Organization", "Groups"),
                create_label: "Create Group",
            },
            ViewType::Users => ViewConfig {
                title: "Users",
                description: "People in your organization",
                breadcrumb: ("Organization", "Users"),
                create_label: "Add User",
            },
            ViewType::Templates => ViewConfig {
                title: "Templates",
                description: "Reusable templates for creating new components",
                breadcrumb: ("Tools", "Templates"),
                create_label: "Create Template",
            },
        }
    }
}

impl std::fmt::Display for ViewType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ViewType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewType::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_opens_components() {
        assert_eq!(ViewType::default(), ViewType::Components);
    }

    #[test]
    fn test_every_view_round_trips_through_its_name() {
        for view in ViewType::ALL {
            assert_eq!(view.as_str().parse::<ViewType>().unwrap(), view);
        }
        assert!(matches!(
            "dashboards".parse::<ViewType>(),
            Err(CatalogError::UnknownView(_))
        ));
    }

    #[test]
    fn test_entity_views_select_entity_collection() {
        let entity_views: Vec<_> = ViewType::ALL
            .into_iter()
            .filter(|v| v.is_entity_view())
            .collect();
        assert_eq!(
            entity_views,
            vec![
                ViewType::Components,
                ViewType::Systems,
                ViewType::Apis,
                ViewType::Resources
            ]
        );
        assert_eq!(ViewType::Users.default_entity_type(), None);
        assert_eq!(ViewType::Apis.default_entity_type(), Some(EntityType::Api));
    }
}
