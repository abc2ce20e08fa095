pub mod localize;
pub mod menu_service;
pub mod menu_source;

pub use menu_service::MenuService;
pub use menu_source::{MenuSource, PgMenuSource};
