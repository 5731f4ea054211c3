use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{OrgScope, SortKey, SortOrder, ViewQuery, ViewType, DEFAULT_ORGANIZATION};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub notifications: NotificationConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub default_view: ViewType,
    pub default_org_scope: String,
    pub default_sort: SortKey,
    pub default_order: SortOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_view: ViewType::Components,
            default_org_scope: DEFAULT_ORGANIZATION.to_string(),
            default_sort: SortKey::Name,
            default_order: SortOrder::Asc,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5000,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `catalog.*` file and
    /// `CATALOG_` environment variables
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        config = config.add_source(config::File::with_name("catalog").required(false));

        // Sections are separated by a double underscore since keys contain
        // single ones: CATALOG_EXPORT__OUTPUT_DIR
        config = config.add_source(
            config::Environment::with_prefix("CATALOG")
                .separator("__")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Initial query for a new session
    pub fn initial_query(&self) -> ViewQuery {
        ViewQuery {
            org: OrgScope::from(self.catalog.default_org_scope.as_str()),
            sort_by: self.catalog.default_sort,
            sort_order: self.catalog.default_order,
            ..ViewQuery::default()
        }
    }

    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.notifications.dismiss_after_ms)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.logging.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
