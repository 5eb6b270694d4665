//! Password audit library
//!
//! Evaluates passwords along two independent axes: structural strength
//! (composition checks plus a common-password list) and exposure in known
//! breaches (k-anonymity range lookup, only a 5-character SHA-1 prefix ever
//! leaves the process).
//!
//! # Features
//!
//! - `async` (default): Enables cancellable audits and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Optional file extending the built-in common list
//! - `PWD_BREACH_API_URL`: Range endpoint (default: `https://api.pwnedpasswords.com/range/`)
//! - `PWD_BREACH_TIMEOUT_SECS`: Request timeout (default: 10)
//! - `PWD_BREACH_ADD_PADDING`: Request padded responses (default: true)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{BreachOutcome, PasswordAuditor};
//! use secrecy::SecretString;
//!
//! # async fn run() -> Result<(), pwd_audit::AuditError> {
//! let auditor = PasswordAuditor::from_env()?;
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let result = auditor.audit(&password, None).await;
//!
//! println!("Strength: {}", result.tier());
//! for reason in result.deficiencies() {
//!     println!("- {reason}");
//! }
//! match result.breach() {
//!     BreachOutcome::Found(count) => println!("Found in {count} breaches"),
//!     BreachOutcome::Clean => println!("Not found in known breaches"),
//!     BreachOutcome::Unknown(err) => println!("Exposure status not determined: {err}"),
//! }
//! # Ok(())
//! # }
//! ```

// Internal modules
mod audit;
mod blacklist;
mod breach;
mod config;
mod digest;
mod error;
mod evaluator;
mod sections;
mod types;

// Public API
pub use audit::{AuditResult, PasswordAuditor, ADVISORY_RECOMMENDATIONS};
pub use blacklist::{BlacklistError, CommonPasswords, BLACKLIST_PATH_ENV};
pub use breach::{BreachChecker, BreachOutcome};
pub use config::{BreachApiConfig, DEFAULT_BREACH_API_URL, DEFAULT_TIMEOUT};
pub use digest::{PasswordDigest, DIGEST_HEX_LEN, PREFIX_LEN};
pub use error::{AuditError, BreachError, ConfigError, FailureKind};
pub use evaluator::{evaluate_password_strength, StrengthEvaluator};
pub use types::{Deficiency, StrengthEvaluation, StrengthTier};
