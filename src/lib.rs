//! Quiet/verbose-aware console output for command-line programs.
//!
//! Four verbs decide whether a message prints and where:
//! [`mention`], [`warn`], [`babble`] and [`caution`]. See [`output`] for the
//! policy and the [`Emitter`] that implements it.

pub mod config;
mod macros;
pub mod output;
pub mod styling;

pub use config::{ConfigError, OutputConfig};
pub use output::*;
