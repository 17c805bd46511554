//! Remote resource lifecycle
//!
//! The tagged union every data-backed view holds instead of separate
//! loading/error/data fields.

use crate::error::Error;

/// State of a remotely fetched value
#[derive(Debug)]
pub enum Resource<T> {
    /// The fetch has been issued and has not resolved yet
    Loading,

    /// The fetch succeeded
    Loaded(T),

    /// The fetch failed; the error is surfaced once, never retried
    /// automatically
    Failed(Error),
}

impl<T> Resource<T> {
    /// Fold a fetch outcome into the resource state
    pub fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Resource::Loaded(value),
            Err(err) => Resource::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    /// The loaded value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Resource::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Resource::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Resource::Loading
    }
}
