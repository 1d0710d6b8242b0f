//! Server configuration read from the environment.

use std::path::PathBuf;

use error_stack::Report;

use crate::constants::{
    DEFAULT_API_BASE_URL, ENTERPRISE_API_PATH, ENV_HOST, ENV_LOG_FILE, ENV_LOG_LEVEL,
    ENV_READ_ONLY, ENV_TOKEN, TRACE_LOG_FILENAME,
};
use crate::error::{Error, Result};
use crate::support::TracingLevel;

/// Everything the server needs to start
#[derive(Clone)]
pub struct ServerConfig {
    /// Personal access token sent as a bearer token
    pub token:        String,
    /// REST API root, without a trailing slash
    pub api_base_url: String,
    /// Only register tools that never modify remote state
    pub read_only:    bool,
    /// Initial trace level
    pub log_level:    TracingLevel,
    /// Trace log location
    pub log_file:     PathBuf,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("token", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("read_only", &self.read_only)
            .field("log_level", &self.log_level)
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(ENV_TOKEN)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                Report::new(Error::Configuration(format!("{ENV_TOKEN} is not set")))
            })?;

        let api_base_url = api_base_url(lookup(ENV_HOST).as_deref());

        let read_only = lookup(ENV_READ_ONLY).is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            )
        });

        let log_level = match lookup(ENV_LOG_LEVEL) {
            Some(level) => level.parse::<TracingLevel>().map_err(|e| {
                Report::new(Error::Configuration(e)).attach(format!("{ENV_LOG_LEVEL}={level}"))
            })?,
            None => TracingLevel::default(),
        };

        let log_file = lookup(ENV_LOG_FILE)
            .filter(|path| !path.trim().is_empty())
            .map_or_else(
                || std::env::temp_dir().join(TRACE_LOG_FILENAME),
                PathBuf::from,
            );

        Ok(Self {
            token,
            api_base_url,
            read_only,
            log_level,
            log_file,
        })
    }
}

/// Resolve the REST root for github.com or an Enterprise Server host
fn api_base_url(host: Option<&str>) -> String {
    let host = host.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if host.is_empty() || host == "github.com" || host == "https://github.com" {
        return DEFAULT_API_BASE_URL.to_string();
    }

    let with_scheme = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    };
    format!("{with_scheme}{ENTERPRISE_API_PATH}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_token_is_required() {
        let err = config(&[]).unwrap_err();
        assert!(matches!(err.current_context(), Error::Configuration(_)));

        let err = config(&[(ENV_TOKEN, "  ")]).unwrap_err();
        assert!(matches!(err.current_context(), Error::Configuration(_)));
    }

    #[test]
    fn test_defaults() {
        let config = config(&[(ENV_TOKEN, "ghp_example")]).unwrap();
        assert_eq!(config.token, "ghp_example");
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert!(!config.read_only);
        assert_eq!(config.log_level, TracingLevel::Warn);
        assert!(config.log_file.ends_with(TRACE_LOG_FILENAME));
    }

    #[test]
    fn test_enterprise_host() {
        assert_eq!(
            api_base_url(Some("github.example.com")),
            "https://github.example.com/api/v3"
        );
        assert_eq!(
            api_base_url(Some("http://ghes.internal/")),
            "http://ghes.internal/api/v3"
        );
        assert_eq!(api_base_url(Some("github.com")), "https://api.github.com");
        assert_eq!(api_base_url(None), "https://api.github.com");
    }

    #[test]
    fn test_read_only_and_logging() {
        let config = config(&[
            (ENV_TOKEN, "t"),
            (ENV_READ_ONLY, "TRUE"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FILE, "/var/log/github_mcp.log"),
        ])
        .unwrap();
        assert!(config.read_only);
        assert_eq!(config.log_level, TracingLevel::Debug);
        assert_eq!(config.log_file, PathBuf::from("/var/log/github_mcp.log"));

        let err = config_err(&[(ENV_TOKEN, "t"), (ENV_LOG_LEVEL, "loud")]);
        assert!(matches!(err.current_context(), Error::Configuration(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = config(&[(ENV_TOKEN, "ghp_secret")]).unwrap();
        assert!(!format!("{config:?}").contains("ghp_secret"));
    }

    fn config_err(vars: &[(&str, &str)]) -> Report<Error> {
        config(vars).unwrap_err()
    }
}
