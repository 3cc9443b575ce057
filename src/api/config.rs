use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{defaults, envvars};

use super::GraphError;

/// Connection settings for [`BetaService`](super::BetaService).
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    /// Root of the beta endpoint, without a trailing `/`.
    pub base_url: String,
    pub access_token: Option<String>,
    pub request_timeout: Duration,
    /// Retries stop once this much time has passed since the first attempt.
    pub max_retry_elapsed: Duration,
    pub retry_initial_interval: Duration,
    pub log_requests: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            base_url: defaults::GRAPH_BETA_BASE_URL.to_string(),
            access_token: None,
            request_timeout: defaults::API_REQUEST_TIMEOUT,
            max_retry_elapsed: defaults::MAX_RETRY_ELAPSED,
            retry_initial_interval: defaults::RETRY_INITIAL_INTERVAL,
            log_requests: false,
        }
    }
}

impl GraphConfig {
    pub fn new(base_url: &str, access_token: &str) -> Self {
        GraphConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: Some(access_token.to_string()),
            ..Default::default()
        }
    }

    pub fn from_env() -> Result<Self, GraphError> {
        let mut config = GraphConfig::default();
        if let Some(base_url) = non_empty_var(envvars::GRAPH_BETA_BASE_URL) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        config.access_token = non_empty_var(envvars::GRAPH_ACCESS_TOKEN);
        if let Some(secs) = parse_var::<u64>(envvars::GRAPH_REQUEST_TIMEOUT_SECS)? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(envvars::GRAPH_MAX_RETRY_SECS)? {
            config.max_retry_elapsed = Duration::from_secs(secs);
        }
        config.log_requests = non_empty_var(envvars::LOG_GRAPH_REQUESTS).is_some();
        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(key: &str) -> Result<Option<T>, GraphError> {
    match non_empty_var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| GraphError::Config(format!("{key} must be a whole number, got '{raw}'"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 5] = [
        envvars::GRAPH_BETA_BASE_URL,
        envvars::GRAPH_ACCESS_TOKEN,
        envvars::GRAPH_REQUEST_TIMEOUT_SECS,
        envvars::GRAPH_MAX_RETRY_SECS,
        envvars::LOG_GRAPH_REQUESTS,
    ];

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let config = GraphConfig::from_env().unwrap();
            assert_eq!(config, GraphConfig::default());
            assert_eq!(config.base_url, "https://graph.microsoft.com/beta");
            assert_eq!(config.max_retry_elapsed, Duration::from_secs(180));
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                (envvars::GRAPH_BETA_BASE_URL, Some("http://localhost:1234/beta/")),
                (envvars::GRAPH_ACCESS_TOKEN, Some("token")),
                (envvars::GRAPH_REQUEST_TIMEOUT_SECS, Some("5")),
                (envvars::GRAPH_MAX_RETRY_SECS, Some(" 30 ")),
                (envvars::LOG_GRAPH_REQUESTS, Some("1")),
            ],
            || {
                let config = GraphConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://localhost:1234/beta");
                assert_eq!(config.access_token.as_deref(), Some("token"));
                assert_eq!(config.request_timeout, Duration::from_secs(5));
                assert_eq!(config.max_retry_elapsed, Duration::from_secs(30));
                assert!(config.log_requests);
            },
        );
    }

    #[test]
    fn test_empty_values_are_ignored() {
        temp_env::with_vars(
            [
                (envvars::GRAPH_ACCESS_TOKEN, Some("")),
                (envvars::LOG_GRAPH_REQUESTS, Some("")),
            ],
            || {
                let config = GraphConfig::from_env().unwrap();
                assert_eq!(config.access_token, None);
                assert!(!config.log_requests);
            },
        );
    }

    #[test]
    fn test_bad_number() {
        temp_env::with_var(envvars::GRAPH_REQUEST_TIMEOUT_SECS, Some("soon"), || {
            let err = GraphConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("GRAPH_REQUEST_TIMEOUT_SECS"));
        });
    }
}
