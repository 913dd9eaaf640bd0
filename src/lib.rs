//! Password policy library
//!
//! Validates candidate passwords against NIST SP-800-63B 5.1.1.2: a minimum
//! and maximum length, measured in Unicode code points, and a list of known
//! weak passwords. Also normalizes passwords (NFKC, UTF-8) before hashing.
//!
//! # Features
//!
//! - `async` (default): Enables loading an external weak password list via tokio
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use passpol::PasswordPolicy;
//!
//! // Build once at startup (8 to 64 code points, bundled weak password list)
//! let policy = PasswordPolicy::try_default().expect("Failed to load weak password list");
//!
//! assert!(!policy.accepts("password"));
//! assert!(!policy.accepts("short"));
//! assert!(policy.accepts("correct horse battery staple"));
//!
//! // Canonical bytes to feed the password hash
//! let bytes = policy.normalize("\u{C4}\u{FB03}n");
//! assert_eq!(bytes, "\u{C4}ffin".as_bytes());
//! ```

// Internal modules
mod bounds;
mod normalize;
mod policy;
mod sections;
mod store;
mod weak_list;

// Public API
pub use bounds::{code_points, LengthBounds};
pub use normalize::{normalize, normalize_secret};
pub use policy::{PasswordPolicy, PolicyError};
pub use sections::Rejection;
pub use store::PolicyStore;
pub use weak_list::{EMBEDDED_WEAK_PASSWORDS, LoadError, WeakListSource};
