//! Immutable policy state: length bounds plus the filtered weak password set.

use std::collections::HashSet;

use crate::bounds::LengthBounds;
use crate::weak_list::{self, LoadError, WeakListSource};

/// Length bounds and the weak passwords that fall within them.
///
/// Built once and never mutated, so it can be shared across threads
/// (e.g. behind an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct PolicyStore {
    bounds: LengthBounds,
    weak_passwords: HashSet<String>,
}

impl PolicyStore {
    /// Builds a store from the embedded weak password list.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] if the embedded list has no entries.
    pub fn new(bounds: LengthBounds) -> Result<Self, LoadError> {
        Self::load(bounds, &WeakListSource::Embedded)
    }

    /// Builds a store from the given source.
    ///
    /// # Errors
    ///
    /// Returns error if the source is missing, unreadable or empty.
    pub fn load(bounds: LengthBounds, source: &WeakListSource) -> Result<Self, LoadError> {
        let content = source.read()?;
        Ok(Self::from_parsed(bounds, source, &content))
    }

    /// Async version of [`PolicyStore::load`].
    #[cfg(feature = "async")]
    pub async fn load_async(
        bounds: LengthBounds,
        source: &WeakListSource,
    ) -> Result<Self, LoadError> {
        let content = source.read_async().await?;
        Ok(Self::from_parsed(bounds, source, &content))
    }

    /// Builds a store from entries already held in memory.
    ///
    /// Entries outside `bounds` are dropped, like lines of a loaded list.
    pub fn from_entries<I, S>(bounds: LengthBounds, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let weak_passwords = entries
            .into_iter()
            .map(Into::into)
            .filter(|e| bounds.contains(e))
            .collect();
        Self {
            bounds,
            weak_passwords,
        }
    }

    fn from_parsed(bounds: LengthBounds, _source: &WeakListSource, content: &str) -> Self {
        let weak_passwords = weak_list::parse(content, &bounds);

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Weak password list loaded: {} passwords within [{}, {}] from {:?}",
            weak_passwords.len(),
            bounds.min(),
            bounds.max(),
            _source
        );

        Self {
            bounds,
            weak_passwords,
        }
    }

    pub fn bounds(&self) -> &LengthBounds {
        &self.bounds
    }

    /// Returns `true` if `password` is in the weak list (exact, case-sensitive).
    pub fn is_weak(&self, password: &str) -> bool {
        self.weak_passwords.contains(password)
    }

    /// Number of weak passwords retained after length filtering.
    pub fn len(&self) -> usize {
        self.weak_passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weak_passwords.is_empty()
    }
}
