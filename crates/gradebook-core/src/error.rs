//! Error types for the record codec and record store.
//!
//! `DecodeError` never leaves the store: malformed lines are dropped during
//! load. Everything else surfaces through `StoreError` so callers can match
//! on the failure kind instead of inspecting messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A line of the backing file could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer than the six required fields were present.
    #[error("malformed record: expected 6 fields, found {found}")]
    MissingFields { found: usize },

    /// A mark field was not a non-negative integer.
    #[error("malformed record: {field} is not a valid mark: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// A record's fields violate the record invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("student code is required")]
    EmptyCode,

    #[error("name is required")]
    EmptyName,

    /// The field contains the delimiter or a line break, which the flat-file
    /// format cannot represent.
    #[error("{field} must not contain commas or line breaks")]
    ForbiddenCharacter { field: &'static str },

    #[error("coursework {index} must be between 0 and 20, got {value}")]
    CourseworkOutOfRange { index: usize, value: u32 },

    #[error("exam must be between 0 and 100, got {value}")]
    ExamOutOfRange { value: u32 },
}

/// Errors returned by record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("student {0} already exists")]
    DuplicateCode(String),

    #[error("student {0} not found")]
    NotFound(String),

    /// The backing file could not be read or written.
    #[error("failed to access {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn persist(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Persist {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the operation referenced an absent student code.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Returns `true` if the operation was rejected before any mutation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::Validation(_) | StoreError::DuplicateCode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        assert!(StoreError::NotFound("S1".into()).is_not_found());
        assert!(StoreError::DuplicateCode("S1".into()).is_validation());
        assert!(StoreError::from(ValidationError::EmptyName).is_validation());

        let persist = StoreError::persist("marks.txt", io::Error::other("disk full"));
        assert!(!persist.is_not_found());
        assert!(!persist.is_validation());
        assert_eq!(persist.to_string(), "failed to access marks.txt");
    }
}
