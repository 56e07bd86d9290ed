//! Interfaces to the collaborators the playground drives but does not own.
//!
//! The web UI implements these on top of the browser; tests use in-memory
//! fakes.

use std::future::Future;

use crate::error::{ClipboardError, InterpreterError};

/// The external WDTE runtime.
pub trait Interpreter {
    /// Evaluate `source` and return everything it printed.
    fn run(&self, source: &str) -> impl Future<Output = Result<String, InterpreterError>>;
}

/// System clipboard.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The document location the share fragment lives in.
pub trait Location {
    /// Current fragment without the leading `#`, or `None` when there is none.
    fn fragment(&self) -> Option<String>;

    fn set_fragment(&self, fragment: &str);

    /// Scheme, host and port, e.g. `https://example.org`.
    fn origin(&self) -> String;

    /// Path component, e.g. `/playground/`.
    fn path(&self) -> String;
}
