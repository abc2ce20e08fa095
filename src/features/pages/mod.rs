//! Server-rendered site pages.
//!
//! | Path | Page |
//! |------|------|
//! | `/` | 307 to `/tr` |
//! | `/contact` | 307 to `/tr/contact` |
//! | `/{lang}` | Home: hero and featured products |
//! | `/{lang}/menu` | Menu tree with cart |
//! | `/{lang}/about` | About |
//! | `/{lang}/contact` | Contact details and map |

pub mod handlers;
pub mod routes;
pub mod services;
pub mod views;

pub use services::PageService;
