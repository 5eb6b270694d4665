//! SHA-1 password digest split for k-anonymity range lookups.

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use std::fmt;

/// Number of leading hex characters disclosed to the range service.
pub const PREFIX_LEN: usize = 5;

/// Length of the uppercase hex SHA-1 digest.
pub const DIGEST_HEX_LEN: usize = 40;

/// Uppercase hex SHA-1 digest of a password.
///
/// Only [`PasswordDigest::prefix`] may leave the process. `Debug` shows the
/// prefix and redacts the rest.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    hex: String,
}

impl PasswordDigest {
    /// Hashes the UTF-8 bytes of the password.
    pub fn compute(password: &SecretString) -> Self {
        let bytes = Sha1::digest(password.expose_secret().as_bytes());
        Self {
            hex: bytes.iter().map(|b| format!("{b:02X}")).collect(),
        }
    }

    /// First five hex characters, the only part sent over the network.
    pub fn prefix(&self) -> &str {
        &self.hex[..PREFIX_LEN]
    }

    /// Remaining 35 hex characters, matched locally.
    pub fn suffix(&self) -> &str {
        &self.hex[PREFIX_LEN..]
    }

    pub fn as_hex(&self) -> &str {
        &self.hex
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("prefix", &self.prefix())
            .field("suffix", &"[REDACTED]")
            .finish()
    }
}
