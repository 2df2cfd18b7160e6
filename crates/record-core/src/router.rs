//! Turns an inbound message body into reply text.

use std::sync::Arc;

use crate::command::{Command, Verb};
use crate::error::{RecordError, Result};
use crate::ledger::PrLedger;
use crate::store::RowStore;

pub const HELP_TEXT: &str =
    "Unknown command. Please use 'set' or 'get' followed by the exercise and lift.";

pub const NO_PR_TEXT: &str = "No PR recorded.";

/// Dispatches parsed commands against a shared row store.
#[derive(Clone)]
pub struct CommandRouter {
    store: Arc<dyn RowStore>,
}

impl CommandRouter {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn RowStore> {
        &self.store
    }

    /// Handle one message. Never fails: errors become reply text.
    pub fn handle(&self, body: &str) -> String {
        let Some(command) = Command::parse(body) else {
            tracing::debug!("unrecognized message");
            return HELP_TEXT.to_string();
        };
        match self.dispatch(&command) {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_input_error() {
                    tracing::debug!(exercise = %command.exercise, "rejected input: {e}");
                } else {
                    tracing::warn!(exercise = %command.exercise, "command failed: {e}");
                }
                error_reply(&e)
            }
        }
    }

    pub fn dispatch(&self, command: &Command) -> Result<String> {
        let ledger = PrLedger::new(self.store.as_ref());
        tracing::debug!(verb = ?command.verb, exercise = %command.exercise, "dispatch");
        match command.verb {
            Verb::Set => {
                let raw = command
                    .argument
                    .as_deref()
                    .ok_or_else(|| RecordError::InvalidLift(String::new()))?;
                Ok(ledger.update_pr(command.exercise, raw)?.to_string())
            }
            Verb::Get => Ok(match ledger.get_max(command.exercise)? {
                Some(best) => format!(
                    "Your highest {} is {} kg.",
                    command.exercise.display_name(),
                    best.text
                ),
                None => NO_PR_TEXT.to_string(),
            }),
        }
    }
}

/// Reply text for a failed command.
pub fn error_reply(e: &dyn std::fmt::Display) -> String {
    format!("An error occurred: {e}")
}
