//! Terminal failure path
//!
//! `die` is the one place output policy meets process lifecycle. The emitter
//! renders the message into a [`Fatal`] and hands it to an [`Abort`]
//! collaborator, which must not return. Quiet mode withholds the error from the
//! collaborator but never the termination itself.

use crate::styling::{eprintln, error_line};

/// A message passed to `die`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Fatal {
    pub message: String,
}

impl Fatal {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ends the program
///
/// Receives `None` when the emitter is quiet.
pub trait Abort: Send + Sync {
    fn abort(&self, error: Option<&Fatal>) -> !;
}

/// Default collaborator: report to standard error, then exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    pub code: i32,
}

impl Default for Exit {
    fn default() -> Self {
        Self { code: 1 }
    }
}

impl Abort for Exit {
    fn abort(&self, error: Option<&Fatal>) -> ! {
        if let Some(error) = error {
            eprintln!("{}", error_line(error));
        }
        log::debug!("Exiting with status {}", self.code);
        std::process::exit(self.code)
    }
}
