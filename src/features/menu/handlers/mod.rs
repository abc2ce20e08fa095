pub mod menu_handler;

pub use menu_handler::*;
