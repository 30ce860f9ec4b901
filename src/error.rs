//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Longest error message echoed back in a 500 body.
pub const MAX_DETAIL_LEN: usize = 200;

/// Failure to produce the schema document of a single model. Never fails a catalog build.
#[derive(Error, Debug)]
pub enum ModelSchemaError {
    #[error("field '{field}' has unknown type '{type_name}'")]
    UnknownType { field: String, type_name: String },
    #[error("field '{0}' is an array without 'items'")]
    MissingItems(String),
    #[error("field '{field}' has invalid pattern: {reason}")]
    InvalidPattern { field: String, reason: String },
    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// Whole-catalog failures, surfaced to the caller.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("model declarations not found: {source_name}")]
    Unavailable { source_name: String },
    #[error("{0}")]
    Internal(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Serialize)]
pub struct DetailBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Catalog(CatalogError::Unavailable { source_name }) => (
                StatusCode::BAD_REQUEST,
                format!("Schemas module not found. Define schemas in {} module", source_name),
            ),
            AppError::Catalog(CatalogError::Internal(message)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error loading schemas: {}", truncate(message, MAX_DETAIL_LEN)),
            ),
        };
        (status, Json(DetailBody { detail })).into_response()
    }
}

/// Cut `s` to at most `max` characters, respecting char boundaries.
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_messages() {
        assert_eq!(truncate("boom", 10), "boom");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("ééé", 2), "éé");
    }

    #[test]
    fn unavailable_maps_to_bad_request() {
        let resp = AppError::from(CatalogError::Unavailable {
            source_name: "schemas.json".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let resp = AppError::from(CatalogError::Internal("bad json".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
