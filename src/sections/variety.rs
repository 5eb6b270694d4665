//! Character variety sections - lowercase, uppercase, digits, symbols.

pub fn lowercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase())
}

pub fn uppercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_uppercase())
}

/// Any Unicode numeric character, so `٣` or `७` count as digits too.
pub fn digit_section(password: &str) -> bool {
    password.chars().any(|c| c.is_numeric())
}

/// ASCII punctuation only: `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`.
pub fn symbol_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_punctuation())
}
