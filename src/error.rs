use thiserror::Error;

use crate::model::InputPosition;

/// A failure while scanning raw text into tokens.
///
/// Produced for invalid characters, unterminated strings, malformed
/// escape sequences, and malformed number spellings. The position points
/// at the offending character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {position}")]
pub struct LexError {
    pub message: String,
    pub position: InputPosition,
}

impl LexError {
    pub fn new(message: impl Into<String>, position: InputPosition) -> Self {
        Self { message: message.into(), position }
    }
}

/// A failure while assembling tokens into a syntax tree.
///
/// Carries what the grammar expected, the token text actually found
/// (`"end of input"` for the terminal token), and the token's position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found} at {position}")]
pub struct ParseError {
    pub expected: String,
    pub found: String,
    pub position: InputPosition,
}

impl ParseError {
    pub fn new(expected: impl Into<String>, found: impl Into<String>, position: InputPosition) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
            position,
        }
    }
}

/// Any error this crate can produce while turning JSON text into styled
/// output. Parse calls fail atomically; no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonGlowError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Conversion from an in-memory value exceeded the nesting limit.
    #[error("depth limit exceeded while converting value - possible circular reference")]
    DepthLimitExceeded,
    /// A value could not be serialized to JSON text.
    #[error("failed to serialize value to JSON: {0}")]
    Serialize(String),
}

impl JsonGlowError {
    /// The input position the error points at, where one exists.
    pub fn position(&self) -> Option<InputPosition> {
        match self {
            JsonGlowError::Lex(err) => Some(err.position),
            JsonGlowError::Parse(err) => Some(err.position),
            JsonGlowError::DepthLimitExceeded | JsonGlowError::Serialize(_) => None,
        }
    }
}
