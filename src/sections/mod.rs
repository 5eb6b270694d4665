//! Password evaluation sections
//!
//! Each section checks one composition criterion. The evaluator runs them in
//! the order of [`COMPOSITION_SECTIONS`].

mod blacklist;
mod length;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

use crate::types::Deficiency;

/// A composition criterion paired with the deficiency reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Returns `true` when the password satisfies the criterion.
    pub passes: fn(&str) -> bool,
    pub deficiency: Deficiency,
}

/// Composition checks in evaluation order. Each passing section scores one point.
pub const COMPOSITION_SECTIONS: [Section; 5] = [
    Section {
        passes: length_section,
        deficiency: Deficiency::TooShort,
    },
    Section {
        passes: lowercase_section,
        deficiency: Deficiency::MissingLowercase,
    },
    Section {
        passes: uppercase_section,
        deficiency: Deficiency::MissingUppercase,
    },
    Section {
        passes: digit_section,
        deficiency: Deficiency::MissingDigit,
    },
    Section {
        passes: symbol_section,
        deficiency: Deficiency::MissingSymbol,
    },
];
