use std::sync::Arc;

use axum::{
    extract::State,
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
};
use minijinja::context;

use crate::core::error::AppError;
use crate::core::extractor::PageLocale;
use crate::features::pages::services::PageService;
use crate::features::pages::views::Page;
use crate::shared::i18n::{dictionary, Locale};
use crate::shared::templates::render_page;

/// A failed page, rendered as HTML in the visitor's language
pub struct PageError {
    locale: Locale,
    error: AppError,
}

impl PageError {
    fn in_locale(locale: Locale) -> impl FnOnce(AppError) -> Self {
        move |error| Self { locale, error }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        tracing::error!("Failed to render page: {}", self.error);

        let page = render_page(
            "error.html",
            context! {
                locale => self.locale,
                dict => dictionary(self.locale),
                status => status.as_u16(),
                home_path => Page::Home.path(self.locale),
            },
        );

        match page {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                self.error.into_response()
            }
        }
    }
}

type PageResult = std::result::Result<Html<String>, PageError>;

/// `/` -> `/tr`
pub async fn redirect_root() -> Redirect {
    Redirect::temporary(&Page::Home.path(Locale::default()))
}

/// `/contact` -> `/tr/contact`
pub async fn redirect_contact() -> Redirect {
    Redirect::temporary(&Page::Contact.path(Locale::default()))
}

/// `/tr/` -> `/tr`, `/en/menu/` -> `/en/menu`
pub async fn trim_trailing_slash(uri: Uri) -> Redirect {
    Redirect::permanent(uri.path().trim_end_matches('/'))
}

pub async fn home_page(
    State(service): State<Arc<PageService>>,
    PageLocale(locale): PageLocale,
    uri: Uri,
) -> PageResult {
    service
        .home(locale, uri.path())
        .await
        .map(Html)
        .map_err(PageError::in_locale(locale))
}

pub async fn menu_page(
    State(service): State<Arc<PageService>>,
    PageLocale(locale): PageLocale,
    uri: Uri,
) -> PageResult {
    service
        .menu(locale, uri.path())
        .await
        .map(Html)
        .map_err(PageError::in_locale(locale))
}

pub async fn about_page(
    State(service): State<Arc<PageService>>,
    PageLocale(locale): PageLocale,
    uri: Uri,
) -> PageResult {
    service
        .about(locale, uri.path())
        .await
        .map(Html)
        .map_err(PageError::in_locale(locale))
}

pub async fn contact_page(
    State(service): State<Arc<PageService>>,
    PageLocale(locale): PageLocale,
    uri: Uri,
) -> PageResult {
    service
        .contact(locale, uri.path())
        .await
        .map(Html)
        .map_err(PageError::in_locale(locale))
}
