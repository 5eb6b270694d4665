//! Breach range service configuration.
//!
//! Defaults point to the public Pwned Passwords range API. Override via
//! environment variables or explicit construction for testing.

use std::time::Duration;
use url::Url;

use crate::error::ConfigError;

/// Public range endpoint; the 5-character prefix is appended as the last segment.
pub const DEFAULT_BREACH_API_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Client-side request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the breach range service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachApiConfig {
    /// Range endpoint base. Always ends with `/`.
    pub base_url: Url,
    pub timeout: Duration,
    /// Ask the service to pad responses with zero-count decoy records.
    pub add_padding: bool,
}

impl Default for BreachApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BREACH_API_URL)
                .expect("default breach API URL is a valid absolute URL"),
            timeout: DEFAULT_TIMEOUT,
            add_padding: true,
        }
    }
}

impl BreachApiConfig {
    /// Configuration for a given base URL with default timeout and padding.
    ///
    /// A missing trailing `/` is added so the prefix lands as a new segment.
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("base_url", raw)?,
            ..Self::default()
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PWD_BREACH_API_URL` (default: `https://api.pwnedpasswords.com/range/`)
    /// - `PWD_BREACH_TIMEOUT_SECS` (default: 10)
    /// - `PWD_BREACH_ADD_PADDING` (`true`/`false`/`1`/`0`, default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = match std::env::var("PWD_BREACH_API_URL") {
            Ok(raw) => parse_base_url("PWD_BREACH_API_URL", &raw)?,
            Err(_) => Self::default().base_url,
        };

        let timeout = match std::env::var("PWD_BREACH_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "PWD_BREACH_TIMEOUT_SECS".into(),
                        raw,
                    ));
                }
            },
            Err(_) => DEFAULT_TIMEOUT,
        };

        let add_padding = match std::env::var("PWD_BREACH_ADD_PADDING") {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "PWD_BREACH_ADD_PADDING".into(),
                        raw,
                    ));
                }
            },
            Err(_) => true,
        };

        Ok(Self {
            base_url,
            timeout,
            add_padding,
        })
    }
}

fn parse_base_url(var: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url =
        Url::parse(&normalized).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidUrl(
            var.to_string(),
            "URL must not carry a query or fragment".to_string(),
        ));
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            var.to_string(),
            "URL cannot be a base".to_string(),
        ));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        remove_env("PWD_BREACH_API_URL");
        remove_env("PWD_BREACH_TIMEOUT_SECS");
        remove_env("PWD_BREACH_ADD_PADDING");
    }

    #[test]
    fn test_default_config() {
        let config = BreachApiConfig::default();
        assert_eq!(config.base_url.as_str(), DEFAULT_BREACH_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.add_padding);
    }

    #[test]
    fn test_with_base_url_adds_trailing_slash() {
        let config = BreachApiConfig::with_base_url("http://127.0.0.1:8080/range").unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/range/");
        assert_eq!(
            config.base_url.join("5BAA6").unwrap().path(),
            "/range/5BAA6"
        );
    }

    #[test]
    fn test_with_base_url_rejects_garbage() {
        assert!(matches!(
            BreachApiConfig::with_base_url("not a url"),
            Err(ConfigError::InvalidUrl(_, _))
        ));
    }

    #[test]
    fn test_with_base_url_rejects_query_and_fragment() {
        assert!(matches!(
            BreachApiConfig::with_base_url("http://127.0.0.1:8080/range?k=v"),
            Err(ConfigError::InvalidUrl(_, _))
        ));
        assert!(matches!(
            BreachApiConfig::with_base_url("http://127.0.0.1:8080/range#frag"),
            Err(ConfigError::InvalidUrl(_, _))
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(BreachApiConfig::from_env().unwrap(), BreachApiConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env("PWD_BREACH_API_URL", "http://localhost:9000/range");
        set_env("PWD_BREACH_TIMEOUT_SECS", "3");
        set_env("PWD_BREACH_ADD_PADDING", "false");

        let config = BreachApiConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:9000/range/");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(!config.add_padding);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        set_env("PWD_BREACH_TIMEOUT_SECS", "0");

        assert!(matches!(
            BreachApiConfig::from_env(),
            Err(ConfigError::InvalidValue(var, _)) if var == "PWD_BREACH_TIMEOUT_SECS"
        ));

        clear_env();
    }
}
