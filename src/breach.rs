//! Breach corpus lookup using the k-anonymity range protocol.
//!
//! The password is hashed locally with SHA-1. Only the first five hex
//! characters of the digest are sent to the range service, which answers with
//! every `SUFFIX:COUNT` record sharing that prefix. The full suffix is matched
//! here and never leaves the process.

use std::num::NonZeroU64;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::SecretString;
use serde::Serialize;

use crate::config::BreachApiConfig;
use crate::digest::PasswordDigest;
use crate::error::{BreachError, ConfigError, FailureKind};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Result of a breach lookup. Exactly one variant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BreachOutcome {
    /// Not present in the corpus.
    Clean,
    /// Present; the count is how often it was observed, always at least 1.
    Found(NonZeroU64),
    /// Exposure status could not be determined.
    Unknown(BreachError),
}

impl BreachOutcome {
    /// Observation count, `Some(0)` for `Clean`, `None` when unknown.
    pub fn count(&self) -> Option<u64> {
        match self {
            BreachOutcome::Clean => Some(0),
            BreachOutcome::Found(count) => Some(count.get()),
            BreachOutcome::Unknown(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, BreachOutcome::Found(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            BreachOutcome::Unknown(err) => Some(err.kind()),
            _ => None,
        }
    }
}

/// Client for the breach range service.
///
/// Holds a reusable `reqwest::Client`; no per-lookup state is kept between
/// calls, so one checker can serve any number of sequential or concurrent
/// lookups. Dropping a pending [`BreachChecker::check`] future abandons the
/// request.
#[derive(Debug, Clone)]
pub struct BreachChecker {
    http: reqwest::Client,
    base_url: url::Url,
}

impl BreachChecker {
    /// Create a checker from configuration.
    pub fn new(config: BreachApiConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        if config.add_padding {
            headers.insert(
                HeaderName::from_static("add-padding"),
                HeaderValue::from_static("true"),
            );
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(ConfigError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Create a checker from `PWD_BREACH_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(BreachApiConfig::from_env()?)
    }

    /// Looks the password up in the breach corpus.
    ///
    /// Issues exactly one `GET {base_url}{prefix}` request. Failures are
    /// returned as [`BreachOutcome::Unknown`], never as `Clean`. No retries.
    pub async fn check(&self, password: &SecretString) -> BreachOutcome {
        let digest = PasswordDigest::compute(password);
        match self.lookup(&digest).await {
            Ok(outcome) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(found = outcome.is_found(), "breach lookup completed");
                outcome
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("breach lookup failed: {}", err);
                BreachOutcome::Unknown(err)
            }
        }
    }

    async fn lookup(&self, digest: &PasswordDigest) -> Result<BreachOutcome, BreachError> {
        let body = self.fetch_range(digest.prefix()).await?;
        let endpoint = endpoint_label(digest.prefix());
        match_suffix(&body, digest.suffix(), &endpoint)
    }

    /// Fetches every record sharing `prefix`.
    ///
    /// Calls `GET {base_url}{prefix}`.
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let endpoint = endpoint_label(prefix);
        let url = self
            .base_url
            .join(prefix)
            .map_err(|e| BreachError::Transport {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| BreachError::from_reqwest(&endpoint, e))?;

        if resp.status() != reqwest::StatusCode::OK {
            return Err(BreachError::Status {
                endpoint,
                status: resp.status().as_u16(),
            });
        }

        resp.text()
            .await
            .map_err(|e| BreachError::from_reqwest(&endpoint, e))
    }
}

fn endpoint_label(prefix: &str) -> String {
    format!("GET /range/{prefix}")
}

/// Scans a range response body for `suffix`.
///
/// Records are `SUFFIX:COUNT`, one per line; suffixes compare
/// ASCII-case-insensitively. A matching record with count 0 is a padding
/// decoy and reads as `Clean`.
pub(crate) fn match_suffix(body: &str, suffix: &str, endpoint: &str) -> Result<BreachOutcome, BreachError> {
    for (idx, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (hash, count) = line.split_once(':').ok_or_else(|| BreachError::MalformedRecord {
            endpoint: endpoint.to_string(),
            line: idx + 1,
        })?;

        if hash.trim().eq_ignore_ascii_case(suffix) {
            let count = count.trim();
            let count: u64 = count.parse().map_err(|_| BreachError::InvalidCount {
                endpoint: endpoint.to_string(),
                count: count.to_string(),
            })?;
            return Ok(NonZeroU64::new(count).map_or(BreachOutcome::Clean, BreachOutcome::Found));
        }
    }

    Ok(BreachOutcome::Clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

    fn found(count: u64) -> BreachOutcome {
        BreachOutcome::Found(NonZeroU64::new(count).unwrap())
    }
    const ENDPOINT: &str = "GET /range/5BAA6";

    #[test]
    fn test_match_found() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\r\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:3\r\n\
                    01330C689E5D64F660D6947A93AD634EF8F:1";
        assert_eq!(match_suffix(body, SUFFIX, ENDPOINT), Ok(found(3)));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let body = "1e4c9b93f3f0682250b6cf8331b7ee68fd8:42\n";
        assert_eq!(match_suffix(body, SUFFIX, ENDPOINT), Ok(found(42)));
    }

    #[test]
    fn test_no_match_is_clean() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\n01330C689E5D64F660D6947A93AD634EF8F:1\n";
        assert_eq!(match_suffix(body, SUFFIX, ENDPOINT), Ok(BreachOutcome::Clean));
    }

    #[test]
    fn test_empty_body_is_clean() {
        assert_eq!(match_suffix("", SUFFIX, ENDPOINT), Ok(BreachOutcome::Clean));
    }

    #[test]
    fn test_padding_record_is_clean() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:0\n";
        assert_eq!(match_suffix(body, SUFFIX, ENDPOINT), Ok(BreachOutcome::Clean));
    }

    #[test]
    fn test_found_count_is_never_zero() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:0\n1E4C9B93F3F0682250B6CF8331B7EE68FD8:1\n";
        let outcome = match_suffix(body, SUFFIX, ENDPOINT).unwrap();
        assert_eq!(outcome.count(), Some(1));
        assert!(matches!(outcome, BreachOutcome::Found(n) if n.get() >= 1));
    }

    #[test]
    fn test_unparseable_count_is_service_error() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:lots\n";
        let err = match_suffix(body, SUFFIX, ENDPOINT).unwrap_err();
        assert_eq!(err.kind(), FailureKind::ServiceError);
        assert!(matches!(err, BreachError::InvalidCount { ref count, .. } if count == "lots"));
    }

    #[test]
    fn test_negative_count_is_service_error() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:-1\n";
        assert!(matches!(
            match_suffix(body, SUFFIX, ENDPOINT),
            Err(BreachError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_record_without_separator_is_malformed() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\n<html>oops</html>\n";
        assert!(matches!(
            match_suffix(body, SUFFIX, ENDPOINT),
            Err(BreachError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(BreachOutcome::Clean.count(), Some(0));
        assert_eq!(found(7).count(), Some(7));
        assert!(found(7).is_found());
        let unknown = BreachOutcome::Unknown(BreachError::Status {
            endpoint: ENDPOINT.into(),
            status: 503,
        });
        assert_eq!(unknown.count(), None);
        assert_eq!(unknown.failure_kind(), Some(FailureKind::ServiceError));
        assert!(!unknown.is_found());
    }
}
