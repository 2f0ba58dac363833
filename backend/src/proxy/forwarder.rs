//! # Proxy Forwarder
//!
//! Stateless translator between a browser request and one call to the
//! processing backend.
//!
//! ## Workflow
//!
//! 1.  **Origin check**: the configured origin is resolved first. A missing or
//!     malformed origin fails with [`ProxyError::Config`] before any socket is
//!     opened.
//!
//! 2.  **Outbound call**: the request is sent with `reqwest`, bounded by the
//!     per-request timeout (status polls use the shorter one). Multipart bodies
//!     are rebuilt into a fresh `reqwest::multipart::Form`, so the outbound
//!     boundary and `Content-Type` are always generated here and never copied
//!     from the browser.
//!
//! 3.  **Relay**: the backend's status code is passed through verbatim. JSON
//!     bodies are decoded and re-encoded; anything else is relayed as text
//!     with the backend's content type (or `text/plain`).
//!
//! 4.  **Diagnostics**: every relayed response carries `x-proxy-api-base`
//!     (the origin used) and `x-proxy-request-id` (the id in the log line).
//!
//! Connection failures and timeouts become [`ProxyError::Transport`], which
//! renders as `502` naming the attempted URL.

use crate::config::{BackendOrigin, ConfigError, Timeouts};
use crate::error::{ProxyError, API_BASE_HEADER};
use crate::proxy::multipart::{into_form, FormPart};
use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::HttpResponse;
use log::{info, warn};
use reqwest::Method;
use serde_json::Value;
use std::time::{Duration, Instant};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-proxy-request-id";

/// Body of an outbound call.
#[derive(Debug, Default)]
pub enum ProxyBody {
    #[default]
    Empty,
    Json(Value),
    Form(Vec<FormPart>),
}

/// One outbound call, described independently of the inbound request.
#[derive(Debug)]
pub struct ProxyRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: ProxyBody,
    timeout: Option<Duration>,
}

impl ProxyRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: ProxyBody::Empty,
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = ProxyBody::Json(body);
        self
    }

    pub fn form(mut self, parts: Vec<FormPart>) -> Self {
        self.body = ProxyBody::Form(parts);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A response read in full from the backend.
#[derive(Debug)]
pub struct Upstream {
    pub origin: String,
    pub request_id: Uuid,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Upstream {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Relays the response to the browser, keeping the status as-is.
    pub fn into_http_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_GATEWAY);
        let mut builder = HttpResponse::build(status);
        builder
            .insert_header((API_BASE_HEADER, self.origin.as_str()))
            .insert_header((REQUEST_ID_HEADER, self.request_id.to_string()));

        let looks_json = self
            .content_type
            .as_deref()
            .map_or(true, |ct| ct.to_ascii_lowercase().contains("json"));
        if looks_json {
            if let Ok(value) = serde_json::from_slice::<Value>(&self.body) {
                return builder.json(value);
            }
        }

        let content_type = self
            .content_type
            .unwrap_or_else(|| "text/plain; charset=utf-8".to_string());
        builder.content_type(content_type).body(self.body)
    }
}

/// Shared across workers as `web::Data<Forwarder>`; holds no per-request state.
pub struct Forwarder {
    client: reqwest::Client,
    origin: Result<BackendOrigin, ConfigError>,
    timeouts: Timeouts,
}

impl Forwarder {
    pub fn new(
        origin: Result<BackendOrigin, ConfigError>,
        timeouts: Timeouts,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeouts.default)
            .build()?;
        Ok(Self {
            client,
            origin,
            timeouts,
        })
    }

    pub fn origin(&self) -> Result<&BackendOrigin, ProxyError> {
        self.origin.as_ref().map_err(|e| {
            warn!("Rejecting proxy call: {}", e);
            ProxyError::Config(e.clone())
        })
    }

    /// The origin when one is configured, without logging a rejection.
    pub fn configured_origin(&self) -> Option<&BackendOrigin> {
        self.origin.as_ref().ok()
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// Performs the call and reads the whole response body.
    pub async fn send(&self, request: ProxyRequest) -> Result<Upstream, ProxyError> {
        let origin = self.origin()?;
        let url = origin.join(&request.path);
        let request_id = Uuid::new_v4();
        let timeout = request.timeout.unwrap_or(self.timeouts.default);
        let started = Instant::now();

        let mut outbound = self
            .client
            .request(request.method.clone(), &url)
            .timeout(timeout);
        if !request.query.is_empty() {
            outbound = outbound.query(&request.query);
        }
        outbound = match request.body {
            ProxyBody::Empty => outbound,
            ProxyBody::Json(value) => outbound.json(&value),
            ProxyBody::Form(parts) => outbound.multipart(into_form(parts)?),
        };

        let transport = |e: reqwest::Error| {
            warn!(
                "[{}] {} {} failed after {:?}: {}",
                request_id,
                request.method,
                url,
                started.elapsed(),
                e
            );
            ProxyError::Transport {
                base: origin.as_str().to_string(),
                url: url.clone(),
                reason: if e.is_timeout() {
                    format!("timed out after {}s", timeout.as_secs())
                } else {
                    e.to_string()
                },
            }
        };

        let response = outbound.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(transport)?;

        info!(
            "[{}] {} {} -> {} in {:?}",
            request_id,
            request.method,
            url,
            status,
            started.elapsed()
        );

        Ok(Upstream {
            origin: origin.as_str().to_string(),
            request_id,
            status,
            content_type,
            body,
        })
    }

    /// `send` followed by a verbatim relay.
    pub async fn forward(&self, request: ProxyRequest) -> Result<HttpResponse, ProxyError> {
        Ok(self.send(request).await?.into_http_response())
    }
}
