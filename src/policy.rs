//! Password policy - accept/reject decision over a [`PolicyStore`].

use secrecy::{ExposeSecret, SecretSlice, SecretString};
use thiserror::Error;

use crate::bounds::LengthBounds;
use crate::normalize;
use crate::sections::{Rejection, SECTIONS};
use crate::store::PolicyStore;
use crate::weak_list::{LoadError, WeakListSource};

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid password length bounds: min={min} max={max} (need 1 <= min <= max)")]
    InvalidBounds { min: usize, max: usize },
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// A password policy following NIST SP-800-63B 5.1.1.2: passwords must have
/// a code-point length within the configured bounds and must not appear in
/// the list of weak passwords.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    store: PolicyStore,
}

impl PasswordPolicy {
    /// Creates a policy with the given bounds and the embedded weak password list.
    ///
    /// # Errors
    ///
    /// Returns error if the bounds are invalid or the list cannot be loaded.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, PolicyError> {
        let bounds = LengthBounds::new(min_length, max_length)?;
        Ok(Self::from_store(PolicyStore::new(bounds)?))
    }

    /// Creates a policy with bounds of 8 and 64 code points.
    ///
    /// # Errors
    ///
    /// Returns error if the embedded list cannot be loaded.
    pub fn try_default() -> Result<Self, PolicyError> {
        Ok(Self::from_store(PolicyStore::new(LengthBounds::DEFAULT)?))
    }

    /// Creates a policy reading the weak password list from `source`.
    ///
    /// # Errors
    ///
    /// Returns error if the source is missing, unreadable or empty.
    pub fn with_source(
        bounds: LengthBounds,
        source: &WeakListSource,
    ) -> Result<Self, PolicyError> {
        Ok(Self::from_store(PolicyStore::load(bounds, source)?))
    }

    pub fn from_store(store: PolicyStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PolicyStore {
        &self.store
    }

    /// Returns `true` if the password is acceptable, `false` otherwise.
    pub fn accepts(&self, password: &str) -> bool {
        self.check(password).is_ok()
    }

    pub fn accepts_secret(&self, password: &SecretString) -> bool {
        self.accepts(password.expose_secret())
    }

    /// Runs the sections in order and returns the first rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first failing section.
    pub fn check(&self, password: &str) -> Result<(), Rejection> {
        for section_fn in SECTIONS {
            if let Some(rejection) = section_fn(&self.store, password) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password rejected: {}", rejection);
                return Err(rejection);
            }
        }
        Ok(())
    }

    /// See [`normalize::normalize`].
    pub fn normalize(&self, password: &str) -> Vec<u8> {
        normalize::normalize(password)
    }

    pub fn normalize_secret(&self, password: &SecretString) -> SecretSlice<u8> {
        normalize::normalize_secret(password)
    }
}
