//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::CommonPasswords;
use crate::sections::{blacklist_section, COMPOSITION_SECTIONS};
use crate::types::{StrengthEvaluation, StrengthTier};

/// Structural strength evaluator.
///
/// Holds only the immutable common-password list, so a single instance can be
/// shared across threads and reused for any number of evaluations.
#[derive(Debug, Clone, Default)]
pub struct StrengthEvaluator {
    common: CommonPasswords,
}

impl StrengthEvaluator {
    pub fn new(common: CommonPasswords) -> Self {
        Self { common }
    }

    pub fn common_passwords(&self) -> &CommonPasswords {
        &self.common
    }

    /// Evaluates password strength.
    ///
    /// Every failed composition section contributes one deficiency, in section
    /// order. A common password additionally gets `TooCommon` appended and its
    /// score forced to 0.
    pub fn evaluate(&self, password: &SecretString) -> StrengthEvaluation {
        let pwd = password.expose_secret();
        let mut deficiencies = Vec::new();
        let mut score: u8 = 0;

        for section in &COMPOSITION_SECTIONS {
            if (section.passes)(pwd) {
                score += 1;
            } else {
                deficiencies.push(section.deficiency);
            }
        }

        if let Some(common) = blacklist_section(pwd, &self.common) {
            deficiencies.push(common);
            score = 0;
        }

        StrengthEvaluation {
            score,
            tier: StrengthTier::from_score(score),
            deficiencies,
        }
    }
}

/// Evaluates password strength against the built-in common list.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthEvaluation` containing score, tier and deficiencies.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthEvaluation {
    StrengthEvaluator::default().evaluate(password)
}
