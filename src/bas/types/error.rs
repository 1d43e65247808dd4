//! Custom error types for the jaudio-bas crate.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The key that failed to resolve in a sound lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(u32),
    Name(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "ID {:#010x} ({})", id, id),
            LookupKey::Name(name) => write!(f, "name \"{}\"", name),
        }
    }
}

fn entry_suffix(entry: &Option<usize>) -> String {
    entry.map(|i| format!(" (entry {})", i)).unwrap_or_default()
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum BasError {
    /// The lookup table file could not be opened or read.
    #[error("Lookup table \"{}\" cannot be read: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the lookup table is not a `name,id` pair.
    #[error("Malformed lookup table line {line}: {reason}")]
    MalformedSource { line: usize, reason: String },

    /// A sound ID or name is absent from the lookup table.
    #[error("Sound {key} not found in lookup table{}", entry_suffix(.entry))]
    LookupNotFound {
        key: LookupKey,
        /// Index of the sound entry being processed, when known.
        entry: Option<usize>,
    },

    /// The buffer ends before a fixed-size record does.
    #[error("Truncated buffer for {context} at offset {offset}: expected {expected} bytes, but found {found} bytes")]
    TruncatedBuffer {
        context: &'static str,
        offset: usize,
        expected: usize,
        found: usize,
    },

    /// The animation has more entries than the header's 16-bit count can hold.
    #[error("Too many sound entries: {0} (at most 65535 fit in the header)")]
    TooManyEntries(usize),

    /// The JSON document is missing a field or has a field of the wrong type.
    #[error("Malformed exchange data: {0}")]
    MalformedExchangeData(#[source] serde_json::Error),

    /// An error originating from BAS or JSON file I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BasError {
    /// Attaches a sound entry index to lookup failures; other errors pass through.
    pub(crate) fn at_entry(self, index: usize) -> Self {
        match self {
            BasError::LookupNotFound { key, entry: None } => BasError::LookupNotFound {
                key,
                entry: Some(index),
            },
            other => other,
        }
    }
}

/// A convenience `Result` type alias using the crate's `BasError` type.
pub type Result<T> = std::result::Result<T, BasError>;
