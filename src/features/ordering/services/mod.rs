pub mod order_message;
pub mod order_service;
pub mod whatsapp;

pub use order_message::{build_order_message, format_price};
pub use order_service::OrderService;
pub use whatsapp::build_whatsapp_link;
