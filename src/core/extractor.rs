use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::i18n::Locale;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Locale taken from the `{lang}` path segment.
///
/// Never rejects: a missing or unsupported code resolves to the default locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleParam(pub Locale);

impl<S> FromRequestParts<S> for LocaleParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .ok();
        let lang = params.as_ref().and_then(|p| p.get("lang")).map(String::as_str);

        Ok(Self(Locale::from_param_or_default(lang)))
    }
}

/// Locale for the HTML page routes.
///
/// Behaves like [`LocaleParam`] except that a segment containing a dot
/// (`/favicon.ico`, `/robots.txt`) is a file request and gets a 404.
#[derive(Debug, Clone, Copy)]
pub struct PageLocale(pub Locale);

impl<S> FromRequestParts<S> for PageLocale
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .ok();
        let lang = params.as_ref().and_then(|p| p.get("lang")).map(String::as_str);

        if lang.is_some_and(|l| l.contains('.')) {
            return Err(StatusCode::NOT_FOUND);
        }

        Ok(Self(Locale::from_param_or_default(lang)))
    }
}
