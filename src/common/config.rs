use std::env;
use std::time::Duration;

use url::Url;

use crate::common::error::WorkbenchError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    /// `None` disables the request timeout.
    pub request_timeout: Option<Duration>,
    pub log_level: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, WorkbenchError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WorkbenchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("WORKBENCH_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_url)?;
        let timeout_secs = lookup("WORKBENCH_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            base_url,
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn with_base_url(mut self, raw: &str) -> Result<Self, WorkbenchError> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, WorkbenchError> {
    let url = Url::parse(raw.trim()).map_err(|e| WorkbenchError::Config {
        message: format!("WORKBENCH_BASE_URL '{}': {}", raw, e),
    })?;
    if url.cannot_be_a_base() {
        return Err(WorkbenchError::Config {
            message: format!("WORKBENCH_BASE_URL '{}' cannot be used as a base", raw),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(cfg.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn zero_timeout_disables_it() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[("WORKBENCH_TIMEOUT_SECS", "0")])).unwrap();
        assert!(cfg.request_timeout.is_none());
    }

    #[test]
    fn invalid_url_is_a_config_error() {
        let err = ClientConfig::from_lookup(lookup_from(&[("WORKBENCH_BASE_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, WorkbenchError::Config { .. }));
    }

    #[test]
    fn base_url_override() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[]))
            .unwrap()
            .with_base_url("http://solver.internal:8080")
            .unwrap();
        assert_eq!(cfg.base_url.host_str(), Some("solver.internal"));
        assert_eq!(cfg.base_url.port(), Some(8080));
    }
}
