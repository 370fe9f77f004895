//! Error types for topic parsing and building.

use thiserror::Error;

/// Errors produced while decoding an inbound topic/payload pair.
///
/// Both variants describe per-message failures that the network boundary is
/// expected to catch, log, and discard — they must never abort the event
/// loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The topic does not match any shape of the v1 convention.
    #[error("Provided topic is not valid")]
    Grammar,

    /// The payload failed attribute-specific validation.
    #[error("Provided payload is not valid: {0}")]
    Value(String),
}

/// Result type alias for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors produced while building an outbound publication.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A configuration payload could not be encoded as JSON. The affected
    /// publication is abandoned; nothing is handed to the transport.
    #[error("configuration payload could not be encoded as JSON: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// A caller-supplied identifier violates the convention charset.
///
/// This is a wiring defect on the caller's side, not a network condition, so
/// it is surfaced as a plain error the caller may propagate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("identifier must not be empty")]
    Empty,

    #[error("identifier `{0}` contains characters outside [a-z0-9_.,-]")]
    InvalidCharacters(String),
}
