//! Blacklist management module
//!
//! Holds the set of known-weak passwords the evaluator rejects outright.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional file that extends the built-in list.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

const BUILTIN_COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "123456",
    "123456789",
    "qwerty",
    "abc123",
    "password1",
    "111111",
    "123123",
    "letmein",
    "admin",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Immutable set of common passwords, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommonPasswords {
    /// The fixed built-in list.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_COMMON_PASSWORDS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// Built-in list extended with the file named by `PWD_BLACKLIST_PATH`.
    ///
    /// Falls back to [`CommonPasswords::builtin`] when the variable is unset.
    ///
    /// # Errors
    ///
    /// Same as [`CommonPasswords::from_path`] when the variable is set.
    pub fn from_env() -> Result<Self, BlacklistError> {
        match std::env::var_os(BLACKLIST_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::builtin()),
        }
    }

    /// Built-in list extended with entries from a newline-delimited file.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let mut list = Self::builtin();
        list.entries.extend(
            content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty()),
        );

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist initialized: {} passwords from {:?}", list.len(), path);

        Ok(list)
    }

    /// Case-insensitive exact match.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_builtin_contains_known_weak() {
        let list = CommonPasswords::builtin();
        assert_eq!(list.len(), 10);
        for pwd in BUILTIN_COMMON_PASSWORDS {
            assert!(list.contains(pwd));
        }
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let list = CommonPasswords::builtin();
        assert!(list.contains("PASSWORD"));
        assert!(list.contains("LetMeIn"));
        assert!(!list.contains("password2"));
        assert!(!list.contains(""));
    }

    #[test]
    #[serial]
    fn test_from_env_unset_falls_back_to_builtin() {
        remove_env(BLACKLIST_PATH_ENV);

        let list = CommonPasswords::from_env().unwrap();
        assert_eq!(list, CommonPasswords::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_file_not_found() {
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        let result = CommonPasswords::from_env();
        match result {
            Err(BlacklistError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n").expect("Failed to write empty content");

        let result = CommonPasswords::from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_from_env_extends_builtin() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "  Hunter2  ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env(BLACKLIST_PATH_ENV, path);

        let list = CommonPasswords::from_env().unwrap();
        assert_eq!(list.len(), 11);
        assert!(list.contains("hunter2"));
        assert!(list.contains("HUNTER2"));
        assert!(list.contains("admin"));

        remove_env(BLACKLIST_PATH_ENV);
    }
}
