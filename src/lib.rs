//! # wdte-playground
//!
//! Core of the WDTE playground: everything the browser UI does that is not
//! rendering.
//!
//! ## Overview
//!
//! - **Codec**: program text to and from a URL fragment, so a playground
//!   link carries its program
//! - **Notifications**: short-lived status messages with per-entry timeouts
//! - **Catalog**: the canned examples in the Examples menu
//! - **Playground**: the controller behind Run, Examples, Share and Copy
//!
//! The WDTE interpreter, the clipboard and the page location are reached
//! through the traits in [`bridge`].
//!
//! ## Example
//!
//! ```
//! use wdte_playground::{decode, encode};
//!
//! let fragment = encode("io.stdout -> io.writeln 'hi #1';");
//! assert!(!fragment.contains('#'));
//! assert_eq!(decode(&fragment).unwrap(), "io.stdout -> io.writeln 'hi #1';");
//! ```

pub mod bridge;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod notify;
pub mod playground;

pub use bridge::{Clipboard, Interpreter, Location};
pub use catalog::{DEFAULT_PROGRAM, EXAMPLES, Example, INTRODUCTION};
pub use codec::{decode, encode, encode_compact, fragment_of, share_url};
pub use config::Config;
pub use error::{ClipboardError, DecodeError, InterpreterError};
pub use notify::{
    DEFAULT_TIMEOUT_MS, Expiry, Notification, NotificationId, NotificationKind, NotificationQueue,
};
pub use playground::{Playground, RunTicket};
