pub mod common;
pub mod entity;
pub mod filter;
pub mod organization;
pub mod record;
pub mod template;
pub mod view;

pub use common::*;
pub use entity::*;
pub use filter::*;
pub use organization::*;
pub use record::*;
pub use template::*;
pub use view::*;
