//! Playground controller.
//!
//! Holds the editor input, the interpreter output and the description pane,
//! and wires the Run, Examples, Share and Copy Output actions to the codec,
//! the notification queue and the external collaborators.

use log::{debug, warn};

use crate::bridge::{Clipboard, Interpreter, Location};
use crate::catalog::Example;
use crate::codec;
use crate::config::Config;
use crate::error::{ClipboardError, InterpreterError};
use crate::notify::{Expiry, NotificationId, NotificationQueue};

pub const LINK_COPIED: &str = "Link successfully copied to clipboard.";
pub const OUTPUT_COPIED: &str = "Output copied to clipboard.";

/// A started interpreter call.
///
/// Carries the input as it was when the run began, so edits made while the
/// interpreter works do not change what is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    seq: u64,
    source: String,
}

impl RunTicket {
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Playground state plus the clipboard and location it talks to.
pub struct Playground<C, L> {
    clipboard: C,
    location: L,
    input: String,
    output: String,
    description: String,
    /// Always `codec::encode(&input)`.
    fragment: String,
    notifications: NotificationQueue,
    next_run: u64,
    /// Newest run whose result reached `output`.
    applied_run: Option<u64>,
}

impl<C: Clipboard, L: Location> Playground<C, L> {
    /// Start the playground, seeding the input from the location fragment.
    ///
    /// A corrupt fragment falls back to the default program and leaves an
    /// error notification instead of failing.
    pub fn open(clipboard: C, location: L, config: &Config) -> Self {
        let mut notifications =
            NotificationQueue::with_default_timeout(config.notification_timeout_ms);

        let input = match location.fragment().filter(|f| !f.is_empty()) {
            None => config.default_program.clone(),
            Some(fragment) => match codec::decode(&fragment) {
                Ok(text) => {
                    debug!("loaded {} bytes from share fragment", text.len());
                    text
                }
                Err(e) => {
                    warn!("ignoring corrupt share fragment: {}", e);
                    notifications.error(format!(
                        "Could not read the shared link ({}). Loaded the default program.",
                        e
                    ));
                    config.default_program.clone()
                }
            },
        };

        Self {
            clipboard,
            location,
            fragment: codec::encode(&input),
            input,
            output: String::new(),
            description: config.default_description.clone(),
            notifications,
            next_run: 0,
            applied_run: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Share fragment for the current input.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// User edit in the editor.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.fragment = codec::encode(&self.input);
    }

    pub fn load_example(&mut self, example: &Example) {
        self.description = example.description.to_string();
        self.set_input(example.input);
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Snapshot the input and number the run.
    pub fn begin_run(&mut self) -> RunTicket {
        let seq = self.next_run;
        self.next_run += 1;
        debug!("run {} started ({} bytes)", seq, self.input.len());
        RunTicket {
            seq,
            source: self.input.clone(),
        }
    }

    /// Store the result of a run in `output`.
    ///
    /// A result from a run older than one already shown is dropped and
    /// `false` is returned.
    pub fn finish_run(
        &mut self,
        ticket: RunTicket,
        result: Result<String, InterpreterError>,
    ) -> bool {
        if self.applied_run.is_some_and(|applied| applied > ticket.seq) {
            debug!("run {} finished after a newer run, dropping it", ticket.seq);
            return false;
        }
        self.applied_run = Some(ticket.seq);
        self.output = match result {
            Ok(output) => output,
            Err(e) => {
                debug!("run {} failed: {}", ticket.seq, e);
                e.to_string()
            }
        };
        true
    }

    /// Evaluate the current input and show the result or the error.
    pub async fn run<I: Interpreter>(&mut self, interpreter: &I) -> bool {
        let ticket = self.begin_run();
        let result = interpreter.run(ticket.source()).await;
        self.finish_run(ticket, result)
    }

    /// Put the input into the location fragment and copy the full link.
    pub fn share(&mut self) -> NotificationId {
        self.fragment = codec::encode(&self.input);
        self.location.set_fragment(&self.fragment);

        let url = codec::share_url(&self.location.origin(), &self.location.path(), &self.fragment);
        let result = self.clipboard.copy(&url);
        self.report_copy(result, LINK_COPIED)
    }

    pub fn copy_output(&mut self) -> NotificationId {
        let result = self.clipboard.copy(&self.output);
        self.report_copy(result, OUTPUT_COPIED)
    }

    fn report_copy(
        &mut self,
        result: Result<(), ClipboardError>,
        success: &str,
    ) -> NotificationId {
        match result {
            Ok(()) => self.notifications.success(success),
            Err(e) => {
                warn!("clipboard write failed: {}", e);
                self.notifications
                    .error(format!("Failed to copy to clipboard: {}", e))
            }
        }
    }

    /// User closed a notification, or its timer fired.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.notifications.remove(id);
    }

    /// Close every notification at once. Timers still pending fire into
    /// nothing.
    pub fn dismiss_all(&mut self) {
        self.notifications.clear();
    }

    /// Removals the host still has to schedule.
    pub fn take_expiries(&mut self) -> Vec<Expiry> {
        self.notifications.take_expiries()
    }
}
