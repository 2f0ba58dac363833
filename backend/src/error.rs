//! # Proxy Errors
//!
//! Every failure a route can produce is a [`ProxyError`]. Handlers return
//! `Result<HttpResponse, ProxyError>` and actix turns the error side into a
//! JSON body of the shape `{ "detail": "..." }` through [`ResponseError`], so
//! nothing ever escapes the request boundary as a panic or an empty 500.
//!
//! Errors generated here (as opposed to statuses relayed from the backend)
//! are tagged with an `x-proxy-error` header so the client can tell a proxy
//! configuration problem from a backend rejection without parsing text.

use crate::config::ConfigError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::error::ValidationError;
use common::submission::PROXY_ERROR_HEADER;
use serde_json::json;
use thiserror::Error;

/// Header naming the backend origin a response was produced against.
pub const API_BASE_HEADER: &str = "x-proxy-api-base";

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Proxy could not reach {url}. Check BACKEND_API_URL and that the backend is listening. ({reason})")]
    Transport {
        base: String,
        url: String,
        reason: String,
    },

    #[error("Could not read multipart body: {0}")]
    Multipart(String),
}

impl ProxyError {
    fn class(&self) -> &'static str {
        match self {
            ProxyError::Config(_) => "config",
            ProxyError::Transport { .. } => "transport",
            ProxyError::Validation(_) | ProxyError::BadRequest(_) | ProxyError::Multipart(_) => {
                "validation"
            }
        }
    }
}

impl From<actix_multipart::MultipartError> for ProxyError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        ProxyError::Multipart(e.to_string())
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Validation(_) | ProxyError::BadRequest(_) | ProxyError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            ProxyError::Transport { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header((PROXY_ERROR_HEADER, self.class()));
        if let ProxyError::Transport { base, .. } = self {
            builder.insert_header((API_BASE_HEADER, base.as_str()));
        }
        builder.json(json!({ "detail": self.to_string() }))
    }
}
