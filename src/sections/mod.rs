//! Password policy sections
//!
//! Each section checks one requirement of the policy.

mod length;
mod weak_list;

pub use length::length_section;
pub use weak_list::weak_list_section;

use thiserror::Error;

use crate::store::PolicyStore;

/// Why a candidate password was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
    #[error("Password is in the list of commonly used passwords")]
    Weak,
}

/// Result type for section check functions.
/// - `Some(rejection)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Rejection>;

/// Signature shared by every section.
pub type Section = fn(&PolicyStore, &str) -> SectionResult;

/// Sections in evaluation order; the cheap length check runs first.
pub const SECTIONS: [Section; 2] = [length_section, weak_list_section];
