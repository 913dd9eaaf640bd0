//! Password length bounds, measured in Unicode code points.

use crate::policy::PolicyError;

/// Inclusive `[min, max]` range a password's code-point count must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    /// Bounds recommended by NIST SP-800-63B 5.1.1.2: at least 8, at most 64.
    pub const DEFAULT: LengthBounds = LengthBounds { min: 8, max: 64 };

    /// Creates bounds, rejecting a zero minimum or an inverted range.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidBounds`] if `min == 0` or `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, PolicyError> {
        if min == 0 || min > max {
            #[cfg(feature = "tracing")]
            tracing::error!("Invalid password length bounds: min={} max={}", min, max);
            return Err(PolicyError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns `true` if the code-point length of `password` lies within the bounds.
    pub fn contains(&self, password: &str) -> bool {
        let len = code_points(password);
        self.min <= len && len <= self.max
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Number of Unicode scalar values in `s`.
///
/// Not bytes and not grapheme clusters: `"e\u{301}"` counts as 2,
/// `"\u{1F600}"` counts as 1.
pub fn code_points(s: &str) -> usize {
    s.chars().count()
}
