pub mod bulk;
pub mod collation;
pub mod create_entity;
pub mod dependency_graph;
pub mod export;
pub mod notifications;
pub mod view_filter;

pub use bulk::*;
pub use collation::*;
pub use create_entity::*;
pub use dependency_graph::*;
pub use export::*;
pub use notifications::*;
pub use view_filter::*;
