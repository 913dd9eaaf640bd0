//! Weak list section - checks if password is in the weak password list.

use super::{Rejection, SectionResult};
use crate::store::PolicyStore;

/// Checks the password, verbatim, against the store's weak password set.
///
/// # Returns
/// - `Some(Rejection::Weak)` if the password is listed
/// - `None` if the password is not listed
pub fn weak_list_section(store: &PolicyStore, password: &str) -> SectionResult {
    if store.is_weak(password) {
        return Some(Rejection::Weak);
    }
    None
}
