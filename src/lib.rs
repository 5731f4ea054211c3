pub mod cli;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;

#[cfg(test)]
mod test_fixtures;

pub use error::{CatalogError, CatalogResult};

pub use logic::{
    compose_view, export_records, BulkOutcome, BulkSelection, DependencyGraph, ExportDocument,
    ExportField, ExportFormat, ExportOptions, ExportScope, GraphStats, GraphView, GraphViewMode,
    Notification, NotificationCenter, NotificationKind, RecordFilterEvaluator,
};

pub use model::*;

pub use session::CatalogSession;

pub use store::{CatalogReader, CatalogStore, CatalogWriter, MemoryStore};
