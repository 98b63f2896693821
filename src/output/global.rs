//! Process-wide default emitter
//!
//! This provides a logging-like API where you configure output policy once
//! at program start, then use it anywhere without passing an emitter around.
//!
//! # Implementation
//!
//! - `OnceLock<Mutex<Emitter>>` holds the default, created on first use with
//!   private flags (all false) and the standard streams
//! - `defaults()` and `with_default()` mutate it under the lock
//! - The free verbs clone the emitter (a handful of `Arc` clones) and release
//!   the lock before writing, so a sink may itself call back into this module
//!
//! Anything sharing flag handles with the default, or calling the free verbs,
//! observes changes made anywhere in the process. It is never torn down.

use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use super::emitter::{Emitter, Setting, Verb};

static DEFAULT: OnceLock<Mutex<Emitter>> = OnceLock::new();

fn lock() -> MutexGuard<'static, Emitter> {
    DEFAULT
        .get_or_init(|| Mutex::new(Emitter::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn current() -> Emitter {
    lock().clone()
}

/// Apply `settings` to the default emitter
pub fn defaults(settings: impl IntoIterator<Item = Setting>) {
    lock().configure(settings);
}

/// Scoped mutable access to the default emitter
///
/// The default stays locked while `f` runs; calling the free verbs from
/// inside `f` deadlocks.
///
/// Use for the setters, e.g. a temporary redirect:
/// ```
/// # use chatter::{Buffer, with_default};
/// let scratch = Buffer::default();
/// let saved = with_default(|e| e.set_stderr(Some(scratch.clone().into())));
/// chatter::warn("captured");
/// with_default(|e| e.set_stderr(Some(saved)));
/// assert_eq!(scratch.contents(), "captured\n");
/// ```
pub fn with_default<R>(f: impl FnOnce(&mut Emitter) -> R) -> R {
    f(&mut lock())
}

/// Reset the default emitter's flags and destinations
pub fn reset_defaults() {
    lock().reset();
}

/// A new emitter starting from the default's flags, destinations and modes,
/// with `settings` applied on top
///
/// Used to inherit ambient quiet/verbose state while redirecting a stream.
pub fn clone_default(settings: impl IntoIterator<Item = Setting>) -> Emitter {
    lock().clone_with(settings)
}

pub fn say(verb: Verb, message: impl fmt::Display) {
    current().say(verb, message);
}

pub fn mention(message: impl fmt::Display) {
    current().mention(message);
}

pub fn warn(message: impl fmt::Display) {
    current().warn(message);
}

pub fn babble(message: impl fmt::Display) {
    current().babble(message);
}

pub fn caution(message: impl fmt::Display) {
    current().caution(message);
}

pub fn mentionf(args: fmt::Arguments<'_>) {
    current().mentionf(args);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    current().warnf(args);
}

pub fn babblef(args: fmt::Arguments<'_>) {
    current().babblef(args);
}

pub fn cautionf(args: fmt::Arguments<'_>) {
    current().cautionf(args);
}

pub fn die(message: impl fmt::Display) -> ! {
    current().die(message)
}

pub fn dief(args: fmt::Arguments<'_>) -> ! {
    current().dief(args)
}
