//! Password audit - composes strength evaluation and breach lookup.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::CommonPasswords;
use crate::breach::{BreachChecker, BreachOutcome};
use crate::error::AuditError;
use crate::evaluator::StrengthEvaluator;
use crate::types::{Deficiency, StrengthEvaluation, StrengthTier};

/// Fixed advisory lines for audit reports.
pub const ADVISORY_RECOMMENDATIONS: [&str; 3] = [
    "Use a unique password for every site.",
    "Consider using a password manager.",
    "Change passwords found in breaches immediately.",
];

/// Immutable result of one audit.
///
/// Holds a masked form of the password (one `*` per character), never the
/// plaintext. A later audit produces a new value instead of mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    strength: StrengthEvaluation,
    breach: BreachOutcome,
    masked_password: String,
    checked_at: DateTime<Utc>,
}

impl AuditResult {
    pub fn new(
        password: &SecretString,
        strength: StrengthEvaluation,
        breach: BreachOutcome,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            strength,
            breach,
            masked_password: mask(password),
            checked_at,
        }
    }

    pub fn strength(&self) -> &StrengthEvaluation {
        &self.strength
    }

    pub fn tier(&self) -> StrengthTier {
        self.strength.tier
    }

    pub fn deficiencies(&self) -> &[Deficiency] {
        &self.strength.deficiencies
    }

    pub fn breach(&self) -> &BreachOutcome {
        &self.breach
    }

    pub fn masked_password(&self) -> &str {
        &self.masked_password
    }

    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }
}

fn mask(password: &SecretString) -> String {
    "*".repeat(password.expose_secret().chars().count())
}

/// Runs strength evaluation and breach lookup for one password.
#[derive(Debug, Clone)]
pub struct PasswordAuditor {
    evaluator: StrengthEvaluator,
    checker: BreachChecker,
}

impl PasswordAuditor {
    pub fn new(evaluator: StrengthEvaluator, checker: BreachChecker) -> Self {
        Self { evaluator, checker }
    }

    /// Builds an auditor from `PWD_BLACKLIST_PATH` and `PWD_BREACH_*`.
    pub fn from_env() -> Result<Self, AuditError> {
        let evaluator = StrengthEvaluator::new(CommonPasswords::from_env()?);
        let checker = BreachChecker::from_env()?;
        Ok(Self::new(evaluator, checker))
    }

    pub fn evaluator(&self) -> &StrengthEvaluator {
        &self.evaluator
    }

    pub fn checker(&self) -> &BreachChecker {
        &self.checker
    }

    /// Audits a password.
    ///
    /// `email` is accepted for front-ends that collect it but is not used.
    pub async fn audit(&self, password: &SecretString, _email: Option<&str>) -> AuditResult {
        let strength = self.evaluator.evaluate(password);
        let breach = self.checker.check(password).await;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            tier = %strength.tier,
            breach_failure = ?breach.failure_kind(),
            "audit completed"
        );

        AuditResult::new(password, strength, breach, Utc::now())
    }

    /// Audits a password unless `token` is cancelled first.
    ///
    /// On cancellation the in-flight breach request is dropped and `None` is
    /// returned.
    #[cfg(feature = "async")]
    pub async fn audit_cancellable(
        &self,
        password: &SecretString,
        email: Option<&str>,
        token: CancellationToken,
    ) -> Option<AuditResult> {
        if token.is_cancelled() {
            return None;
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::info!("audit cancelled");
                None
            }
            result = self.audit(password, email) => Some(result),
        }
    }

    /// Async version that sends the audit result via channel.
    ///
    /// Nothing is sent when the audit is cancelled.
    #[cfg(feature = "async")]
    pub async fn audit_tx(
        &self,
        password: &SecretString,
        email: Option<&str>,
        token: CancellationToken,
        tx: mpsc::Sender<AuditResult>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("audit is about to start...");

        let Some(result) = self.audit_cancellable(password, email, token).await else {
            return;
        };

        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send audit result: {}", _e);
        }
    }
}
