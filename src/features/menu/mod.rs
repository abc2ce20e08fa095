//! Localized restaurant menu.
//!
//! Flat category, subcategory and product rows (each with per-language
//! translation rows) are merged for one language and assembled into a
//! three-level tree.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/{lang}/menu` | No | Full menu tree |
//! | GET | `/api/{lang}/categories` | No | Active categories |
//! | GET | `/api/{lang}/featured` | No | Featured products |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{MenuService, PgMenuSource};
