//! Cart pricing and WhatsApp ordering.
//!
//! There is no order persistence: an order is a prefilled WhatsApp message
//! and the deep link that opens it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/{lang}/order/whatsapp` | No | Build order message and link |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::OrderService;
