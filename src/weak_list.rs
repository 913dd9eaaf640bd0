//! Weak password list sources
//!
//! Handles reading and parsing the newline-delimited list of known-weak passwords.

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::bounds::LengthBounds;

/// The bundled list of commonly used passwords, one per line.
pub const EMBEDDED_WEAK_PASSWORDS: &str = include_str!("../assets/weak-passwords.txt");

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Weak password list not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read weak password list: {0}")]
    Read(#[from] std::io::Error),
    #[error("Weak password list is empty")]
    Empty,
}

/// Where the weak password list comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WeakListSource {
    /// The list compiled into this crate.
    #[default]
    Embedded,
    /// A UTF-8 file on disk, one password per line.
    Path(PathBuf),
}

impl WeakListSource {
    pub fn path<P: AsRef<Path>>(path: P) -> Self {
        WeakListSource::Path(path.as_ref().to_path_buf())
    }

    /// Reads the raw list contents.
    ///
    /// Beyond missing or unreadable sources, a readable source with no
    /// non-empty lines is also an error ([`LoadError::Empty`]), never an
    /// empty denylist.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read or is not valid UTF-8
    /// - The list contains no entries
    pub fn read(&self) -> Result<Cow<'static, str>, LoadError> {
        let content = match self {
            WeakListSource::Embedded => Cow::Borrowed(EMBEDDED_WEAK_PASSWORDS),
            WeakListSource::Path(path) => {
                if !path.exists() {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Weak password list loading FAILED: NotFound {:?}", path);
                    return Err(LoadError::NotFound(path.clone()));
                }
                Cow::Owned(std::fs::read_to_string(path)?)
            }
        };
        ensure_not_empty(self, content)
    }

    /// Async version of [`WeakListSource::read`].
    #[cfg(feature = "async")]
    pub async fn read_async(&self) -> Result<Cow<'static, str>, LoadError> {
        let content = match self {
            WeakListSource::Embedded => Cow::Borrowed(EMBEDDED_WEAK_PASSWORDS),
            WeakListSource::Path(path) => {
                if !tokio::fs::try_exists(path).await? {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Weak password list loading FAILED: NotFound {:?}", path);
                    return Err(LoadError::NotFound(path.clone()));
                }
                Cow::Owned(tokio::fs::read_to_string(path).await?)
            }
        };
        ensure_not_empty(self, content)
    }
}

fn ensure_not_empty(
    _source: &WeakListSource,
    content: Cow<'static, str>,
) -> Result<Cow<'static, str>, LoadError> {
    if content.lines().all(str::is_empty) {
        #[cfg(feature = "tracing")]
        tracing::error!("Weak password list loading FAILED: Empty list {:?}", _source);
        return Err(LoadError::Empty);
    }
    Ok(content)
}

/// Parses a newline-delimited list, keeping only entries within `bounds`.
///
/// Lines are split on `\n` or `\r\n` and otherwise taken verbatim: no trimming,
/// no case folding. Duplicates collapse.
pub fn parse(content: &str, bounds: &LengthBounds) -> HashSet<String> {
    content
        .lines()
        .filter(|l| bounds.contains(l))
        .map(str::to_owned)
        .collect()
}
