//! Length section - checks password length against the policy bounds.

use super::{Rejection, SectionResult};
use crate::bounds::code_points;
use crate::store::PolicyStore;

/// Checks if the password's code-point length is within the store's bounds.
///
/// # Returns
/// - `Some(Rejection::TooShort)` or `Some(Rejection::TooLong)` when out of bounds
/// - `None` if the length is acceptable
pub fn length_section(store: &PolicyStore, password: &str) -> SectionResult {
    let bounds = store.bounds();
    let actual = code_points(password);
    if actual < bounds.min() {
        return Some(Rejection::TooShort {
            min: bounds.min(),
            actual,
        });
    }
    if actual > bounds.max() {
        return Some(Rejection::TooLong {
            max: bounds.max(),
            actual,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::LengthBounds;

    fn store(min: usize, max: usize) -> PolicyStore {
        PolicyStore::from_entries(LengthBounds::new(min, max).unwrap(), Vec::<String>::new())
    }

    #[test]
    fn test_length_section_too_short() {
        let result = length_section(&store(8, 64), "Short1!");
        assert_eq!(result, Some(Rejection::TooShort { min: 8, actual: 7 }));
        assert_eq!(
            result.unwrap().to_string(),
            "Password must be at least 8 characters (got 7)"
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&store(8, 64), "12345678"), None);
    }

    #[test]
    fn test_length_section_exactly_maximum() {
        assert_eq!(length_section(&store(8, 10), "1234567890"), None);
    }

    #[test]
    fn test_length_section_too_long() {
        let result = length_section(&store(8, 10), "12345678901");
        assert_eq!(result, Some(Rejection::TooLong { max: 10, actual: 11 }));
    }

    #[test]
    fn test_length_section_counts_code_points() {
        // 8 code points, 16 bytes
        let pwd = "\u{E4}\u{F6}\u{FC}\u{DF}\u{E4}\u{F6}\u{FC}\u{DF}";
        assert_eq!(length_section(&store(8, 8), pwd), None);
    }

    #[test]
    fn test_length_section_empty() {
        let result = length_section(&store(1, 64), "");
        assert_eq!(result, Some(Rejection::TooShort { min: 1, actual: 0 }));
    }
}
