//! # Server Configuration
//!
//! Command-line flags and environment variables are parsed once at start-up
//! with `clap`. The only value with real validation is the backend origin:
//! it is turned into a [`BackendOrigin`] or a [`ConfigError`] before the
//! server starts, and that result is handed to the forwarder as-is.
//!
//! A bad origin never stops the server. Every proxy route answers with a
//! configuration error instead, which is easier to diagnose from a browser
//! than a process that refuses to boot inside a container.

use clap::Parser;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Parser, Debug, Clone)]
#[command(name = "second-brain-server", version, about = "Ingest gateway and static host for Second Brain")]
pub struct Args {
    /// Absolute URL of the flashcard processing backend.
    #[arg(long = "api-url", env = "BACKEND_API_URL")]
    pub api_url: Option<String>,

    /// Enables `/api/_debug/*` (true/1/yes/on).
    #[arg(long, env = "ENABLE_DEBUG_ENDPOINTS", default_value = "false")]
    pub enable_debug_endpoints: String,

    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory holding the compiled frontend (`index.html` + wasm bundle).
    #[arg(long, env = "STATIC_DIR", default_value = "frontend/dist")]
    pub static_dir: PathBuf,

    #[arg(long = "timeout-secs", env = "PROXY_TIMEOUT_SECS", default_value_t = 12)]
    pub timeout_secs: u64,

    #[arg(long = "status-timeout-secs", env = "PROXY_STATUS_TIMEOUT_SECS", default_value_t = 8)]
    pub status_timeout_secs: u64,
}

impl Args {
    pub fn origin(&self) -> Result<BackendOrigin, ConfigError> {
        BackendOrigin::parse(self.api_url.as_deref())
    }

    pub fn debug_endpoints(&self) -> DebugEndpoints {
        DebugEndpoints(parse_flag(&self.enable_debug_endpoints))
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            default: Duration::from_secs(self.timeout_secs),
            status: Duration::from_secs(self.status_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("BACKEND_API_URL is not set to an absolute URL (e.g., http://localhost:8000 or http://backend:8000).")]
    Missing,

    #[error("BACKEND_API_URL is not set to an absolute URL: '{value}' ({reason}).")]
    Invalid { value: String, reason: String },
}

/// Validated origin of the processing backend, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOrigin(String);

impl BackendOrigin {
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.map(str::trim).filter(|v| !v.is_empty()).ok_or(ConfigError::Missing)?;
        let invalid = |reason: &str| ConfigError::Invalid {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(value).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("missing host"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed"));
        }
        Ok(Self(url.as_str().trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `path` must start with `/`.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub default: Duration,
    /// Status polls get a shorter budget than submissions.
    pub status: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            default: Duration::from_secs(12),
            status: Duration::from_secs(8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugEndpoints(pub bool);

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_trimmed_and_loses_trailing_slash() {
        let origin = BackendOrigin::parse(Some("  http://backend:8000/ ")).unwrap();
        assert_eq!(origin.as_str(), "http://backend:8000");
        assert_eq!(origin.join("/status/abc"), "http://backend:8000/status/abc");
    }

    #[test]
    fn missing_or_relative_origin_is_a_config_error() {
        assert_eq!(BackendOrigin::parse(None), Err(ConfigError::Missing));
        assert_eq!(BackendOrigin::parse(Some("   ")), Err(ConfigError::Missing));

        for bad in ["/api", "backend:8000", "ftp://files.local", "localhost"] {
            let err = BackendOrigin::parse(Some(bad)).unwrap_err();
            assert!(
                err.to_string().contains("not set to an absolute URL"),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn debug_flag_accepts_common_truthy_spellings() {
        for on in ["true", "TRUE", "1", "yes", " on "] {
            assert!(parse_flag(on), "{on}");
        }
        for off in ["", "false", "0", "no", "enabled"] {
            assert!(!parse_flag(off), "{off}");
        }
    }

    #[test]
    fn flags_override_environment() {
        let args = Args::parse_from([
            "second-brain-server",
            "--api-url",
            "http://localhost:8000",
            "--port",
            "9090",
            "--status-timeout-secs",
            "3",
        ]);
        assert_eq!(args.port, 9090);
        assert_eq!(args.timeouts().status, Duration::from_secs(3));
        assert_eq!(args.origin().unwrap().as_str(), "http://localhost:8000");
    }
}
