//! Strength evaluation types shared by the evaluator and audit result.

use serde::Serialize;
use std::fmt;

/// Coarse strength classification derived from the composition score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Maps a composition score to a tier.
    ///
    /// - `5` and above: `Strong`
    /// - `3..=4`: `Medium`
    /// - `0..=2`: `Weak`
    pub fn from_score(score: u8) -> Self {
        match score {
            5.. => StrengthTier::Strong,
            3..=4 => StrengthTier::Medium,
            _ => StrengthTier::Weak,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// A single reason a password failed a structural check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Deficiency {
    TooShort,
    MissingLowercase,
    MissingUppercase,
    MissingDigit,
    MissingSymbol,
    TooCommon,
}

impl Deficiency {
    /// Human-readable advice for this deficiency.
    pub fn message(&self) -> &'static str {
        match self {
            Deficiency::TooShort => "Password must be at least 8 characters.",
            Deficiency::MissingLowercase => "Add lowercase letters.",
            Deficiency::MissingUppercase => "Add uppercase letters.",
            Deficiency::MissingDigit => "Add digits.",
            Deficiency::MissingSymbol => "Add symbols (e.g., !@#$%).",
            Deficiency::TooCommon => "Password is too common.",
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of a strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthEvaluation {
    /// Composition score in `0..=5`; forced to 0 for common passwords.
    pub score: u8,
    pub tier: StrengthTier,
    /// Failed checks in check order, `TooCommon` last.
    pub deficiencies: Vec<Deficiency>,
}

impl StrengthEvaluation {
    pub fn is_common(&self) -> bool {
        self.deficiencies.contains(&Deficiency::TooCommon)
    }
}
