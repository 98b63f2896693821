//! Policy-gated console output.
//!
//! # Architecture
//!
//! One abstraction, [`Emitter`], decides whether a message prints and where.
//! It holds:
//!
//! - three shared [`Flag`]s: quiet, verbose, sync
//! - an auto-newline mode
//! - two [`Destination`]s, standard output and standard error by default
//! - an [`Abort`] collaborator for `die`
//!
//! Flags and destinations are handles: cloning an emitter, or installing the
//! same flag in several emitters, shares them. An argument parser can own the
//! verbose flag and every emitter holding it follows along.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use chatter::{Flag, Setting};
//!
//! // 1. Configure once in main()
//! let verbose = Flag::new(false);
//! chatter::defaults([Setting::Verbose(verbose.clone())]);
//!
//! // 2. Use anywhere in the codebase
//! chatter::mention("Copying files");
//! chatter::babble("skipped: target is newer");
//! chatter::warnf(format_args!("{} files failed", 2));
//! ```
//!
//! ## Policy
//!
//! - **quiet** suppresses every verb, including the error detail of `die`
//! - **verbose** enables `babble` (stdout) and `caution` (stderr)
//! - `mention` (stdout) and `warn` (stderr) print whenever not quiet
//! - **sync** flushes the destination after each write, when it can be flushed

pub mod abort;
pub mod destination;
pub mod emitter;
pub mod flag;
pub mod global;
mod traits;

pub use abort::{Abort, Exit, Fatal};
pub use destination::{Buffer, Destination, FileSink, Flushing, Plain, Stream};
pub use emitter::{Emitter, Setting, Verb, Words};
pub use flag::Flag;
pub use global::{
    babble, babblef, caution, cautionf, clone_default, defaults, die, dief, mention, mentionf,
    reset_defaults, say, warn, warnf, with_default,
};
pub use traits::{Sink, Syncable};
