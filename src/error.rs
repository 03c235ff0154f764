use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::request::ErrorResponse;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read plant catalogue '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed plant catalogue: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("plant catalogue unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed zone rule table: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors surfaced by the HTTP handlers as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Plant '{0}' not found.")]
    PlantNotFound(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Catalog(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::PlantNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
