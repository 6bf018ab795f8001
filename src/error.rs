//! Error types for the boundary around the vocabulary index.
//!
//! The index itself cannot fail: a miss from `contains` or an empty set from
//! `suggest` are ordinary answers. Errors only come from reading a word list
//! ([`LoadError`]) and from rejecting raw user input ([`QueryError`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a vocabulary source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The word list could not be opened.
    #[error("cannot open vocabulary file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed part-way through the source.
    #[error("error reading vocabulary at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// True when the source simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Open { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Why a raw query was rejected before reaching the index.
///
/// The messages are meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please enter a word")]
    Empty,

    #[error("Please enter only one word at a time")]
    MultipleTokens,

    /// First character outside ASCII letters and the apostrophe.
    #[error("The dictionary consists of words and shortened phrases only (found {0:?})")]
    DisallowedCharacter(char),
}

/// Result type alias for loading operations.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;
