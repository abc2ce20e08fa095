//! HTML page templates.
//!
//! Templates live in `templates/pages/` and use Jinja2 syntax. They are
//! compiled into the binary and rendered with HTML auto-escaping.

pub mod engine;

pub use engine::{render_page, TemplateError};
