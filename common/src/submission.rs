//! Turns a proxied HTTP response into a typed result or a [`PipelineError`].
//!
//! The client never reads a response body as anything but text first: a
//! success that is not JSON, or a failure with an HTML body from some
//! intermediary, both end up as [`PipelineError::MalformedResponse`] instead
//! of a parse panic deep inside a component.
//!
//! ## Error classification
//!
//! Errors produced by the proxy itself carry an `x-proxy-error` header naming
//! their class (`config`, `transport`, `validation`). Everything else is the
//! backend talking, and its `detail` text is shown unchanged.

use crate::error::PipelineError;
use crate::jobs::JobHandle;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Name of the header the proxy sets on errors it generated itself.
pub const PROXY_ERROR_HEADER: &str = "x-proxy-error";

/// What the client keeps of an HTTP response before decoding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub proxy_error: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            proxy_error: None,
            body: body.into(),
        }
    }

    pub fn with_proxy_error(mut self, class: impl Into<String>) -> Self {
        self.proxy_error = Some(class.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub fn decode<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, PipelineError> {
    if !raw.is_success() {
        return Err(classify_failure(raw));
    }
    let value: Value = serde_json::from_str(&raw.body).map_err(|_| {
        PipelineError::MalformedResponse("Backend returned non-JSON response.".to_string())
    })?;
    serde_json::from_value(value).map_err(|e| {
        PipelineError::MalformedResponse(format!("Backend returned an unexpected response: {e}"))
    })
}

/// Decodes a submission response and insists on a non-empty job id.
pub fn parse_job_handle(raw: &RawResponse) -> Result<JobHandle, PipelineError> {
    let handle: JobHandle = decode(raw)?;
    if handle.job_id.trim().is_empty() {
        return Err(PipelineError::MalformedResponse(
            "Backend accepted the upload but returned no job id.".to_string(),
        ));
    }
    Ok(handle)
}

fn classify_failure(raw: &RawResponse) -> PipelineError {
    let detail = serde_json::from_str::<Value>(&raw.body)
        .ok()
        .and_then(|body| detail_text(&body));

    let Some(detail) = detail else {
        return PipelineError::MalformedResponse(format!(
            "Request failed with status {} and a non-JSON body.",
            raw.status
        ));
    };

    match raw.proxy_error.as_deref() {
        Some("config") => PipelineError::Config(detail),
        Some("transport") => PipelineError::Transport(detail),
        _ => PipelineError::Rejected {
            status: raw.status,
            detail,
        },
    }
}

/// Pulls the human-readable text out of an error body.
///
/// FastAPI puts it in `detail`, either as a string or as an object carrying
/// its own `detail` plus `next_steps`; a few routes use `message` instead.
fn detail_text(body: &Value) -> Option<String> {
    match body.get("detail") {
        Some(Value::String(s)) => return Some(s.clone()),
        Some(Value::Object(obj)) => {
            let text = obj.get("detail").and_then(Value::as_str)?;
            let steps: Vec<&str> = obj
                .get("next_steps")
                .and_then(Value::as_array)
                .map(|a| a.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            return Some(if steps.is_empty() {
                text.to_string()
            } else {
                format!("{text}. Next steps: {}", steps.join(", "))
            });
        }
        Some(other) if !other.is_null() => return Some(other.to_string()),
        _ => {}
    }
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::StatusReport;

    #[test]
    fn success_json_decodes() {
        let raw = RawResponse::new(200, r#"{"pdf_id":"abc","status":"processing"}"#);
        let report: StatusReport = decode(&raw).unwrap();
        assert_eq!(report.job_id.as_deref(), Some("abc"));
    }

    #[test]
    fn success_with_html_is_malformed() {
        let raw = RawResponse::new(200, "<html>gateway</html>");
        let err = decode::<StatusReport>(&raw).unwrap_err();
        assert_eq!(
            err,
            PipelineError::MalformedResponse("Backend returned non-JSON response.".into())
        );
    }

    #[test]
    fn backend_detail_passes_through_with_status() {
        let raw = RawResponse::new(
            400,
            r#"{"detail":"Only PDF files are allowed. Received: text/plain"}"#,
        );
        assert_eq!(
            decode::<StatusReport>(&raw).unwrap_err(),
            PipelineError::Rejected {
                status: 400,
                detail: "Only PDF files are allowed. Received: text/plain".into()
            }
        );
    }

    #[test]
    fn structured_detail_lists_next_steps() {
        let raw = RawResponse::new(
            422,
            r#"{"detail":{"detail":"No captions","next_steps":["try another video","enable fallback"]}}"#,
        );
        assert_eq!(
            decode::<Value>(&raw).unwrap_err().to_string(),
            "No captions. Next steps: try another video, enable fallback"
        );
    }

    #[test]
    fn proxy_error_header_selects_the_class() {
        let body = r#"{"detail":"BACKEND_API_URL is not set to an absolute URL"}"#;
        let config = RawResponse::new(500, body).with_proxy_error("config");
        assert!(matches!(decode::<Value>(&config), Err(PipelineError::Config(_))));

        let transport = RawResponse::new(502, r#"{"detail":"Proxy could not reach backend"}"#)
            .with_proxy_error("transport");
        assert!(decode::<Value>(&transport).unwrap_err().is_transient());
    }

    #[test]
    fn job_handle_requires_an_id() {
        let ok = RawResponse::new(200, r#"{"pdf_id":"p-1","filename":"notes.pdf"}"#);
        assert_eq!(parse_job_handle(&ok).unwrap().job_id, "p-1");

        let empty = RawResponse::new(200, r#"{"pdf_id":""}"#);
        assert!(matches!(
            parse_job_handle(&empty),
            Err(PipelineError::MalformedResponse(_))
        ));

        let missing = RawResponse::new(200, r#"{"filename":"notes.pdf"}"#);
        assert!(matches!(
            parse_job_handle(&missing),
            Err(PipelineError::MalformedResponse(_))
        ));
    }
}
