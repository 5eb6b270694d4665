//! Length section - checks password minimum length.

/// Minimum number of characters (Unicode scalar values).
pub const MIN_LENGTH: usize = 8;

/// Returns `true` if the password has at least [`MIN_LENGTH`] characters.
pub fn length_section(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
