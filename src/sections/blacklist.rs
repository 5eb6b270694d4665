//! Blacklist section - checks if password is in common password list.

use crate::blacklist::CommonPasswords;
use crate::types::Deficiency;

/// Returns `Some(TooCommon)` if the password is in the common list.
pub fn blacklist_section(password: &str, common: &CommonPasswords) -> Option<Deficiency> {
    common
        .contains(password)
        .then_some(Deficiency::TooCommon)
}
