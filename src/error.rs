//! Error types for the playground core.

use thiserror::Error;

/// A share fragment that could not be turned back into program text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown share scheme {0:?}")]
    UnknownScheme(String),

    #[error("malformed percent escape at offset {offset}")]
    MalformedEscape { offset: usize },

    #[error("invalid character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },

    #[error("decoded fragment is not valid UTF-8")]
    InvalidUtf8,

    #[error("compact payload is not valid base64")]
    InvalidBase64,

    #[error("compact payload is not a zlib stream")]
    InvalidCompression,
}

/// Failure reported by the external interpreter.
///
/// Displays as the interpreter's own message so it can be shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InterpreterError(pub String);

impl From<&str> for InterpreterError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

/// The platform refused or failed a clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ClipboardError(pub String);

impl From<&str> for ClipboardError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}
