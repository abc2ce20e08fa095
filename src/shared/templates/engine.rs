use std::str::FromStr;
use std::sync::OnceLock;

use minijinja::{AutoEscape, Environment, ErrorKind, Value};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::features::ordering::services::format_price;

/// Global template environment
static PAGE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

const PAGE_TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/pages/layout.html")),
    ("home.html", include_str!("../../../templates/pages/home.html")),
    ("menu.html", include_str!("../../../templates/pages/menu.html")),
    ("about.html", include_str!("../../../templates/pages/about.html")),
    ("contact.html", include_str!("../../../templates/pages/contact.html")),
    ("error.html", include_str!("../../../templates/pages/error.html")),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|name| {
        if name.ends_with(".html") {
            AutoEscape::Html
        } else {
            AutoEscape::None
        }
    });
    env.add_filter("price", price_filter);

    for (name, source) in PAGE_TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::error!("Failed to load template {}: {}", name, e);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    PAGE_ENV.get_or_init(init_environment)
}

/// `{{ product.price | price }}` renders `1.234,5 TL`
fn price_filter(value: Value) -> Result<String, minijinja::Error> {
    let amount = Decimal::from_str(&value.to_string()).map_err(|e| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("'{}' is not a price: {}", value, e),
        )
    })?;
    Ok(format_price(amount))
}

/// Render a page template (e.g. `"home.html"`) with a serializable context
pub fn render_page<S: Serialize>(template_name: &str, ctx: S) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}
