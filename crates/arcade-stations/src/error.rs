//! Registry error types.

use thiserror::Error;

/// Errors raised while building the station registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry must hold exactly one entry per station slot.
    #[error("expected {expected} stations, found {found}")]
    WrongCount { expected: usize, found: usize },

    /// A station id lies outside the numbered range.
    #[error("station id {0} is outside {first}..={last}", first = crate::FIRST_STATION, last = crate::LAST_STATION)]
    IdOutOfRange(u8),

    /// Two entries share an id.
    #[error("duplicate station id: {0:02}")]
    DuplicateId(u8),

    /// Two entries share a keyword (compared case-insensitively).
    #[error("duplicate station keyword: {0}")]
    DuplicateKeyword(String),

    /// A keyword is empty, contains whitespace, or starts with a digit.
    #[error("station {id:02}: invalid keyword '{keyword}'")]
    InvalidKeyword { id: u8, keyword: String },

    /// A content file declares a different station than the slot it fills.
    #[error("content for station {expected:02} declares station {found:02}")]
    ContentMismatch { expected: u8, found: u8 },
}
