//! The emitter: four output verbs behind a quiet/verbose policy
//!
//! | Verb | verbose-gated | destination |
//! |---|---|---|
//! | [`mention`](Emitter::mention) | no | stdout |
//! | [`warn`](Emitter::warn) | no | stderr |
//! | [`babble`](Emitter::babble) | yes | stdout |
//! | [`caution`](Emitter::caution) | yes | stderr |
//!
//! Quiet wins over everything. Verbose-gated verbs additionally need verbose.
//! Every verb funnels through one policy check before anything is written.

use std::fmt;
use std::sync::Arc;

use super::abort::{Abort, Exit, Fatal};
use super::destination::{Destination, Stream};
use super::flag::Flag;

/// The four output verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Verb {
    /// Routine notice
    Mention,
    /// Warning
    Warn,
    /// Notice shown only when verbose
    Babble,
    /// Warning shown only when verbose
    Caution,
}

impl Verb {
    pub fn is_verbose_gated(self) -> bool {
        matches!(self, Verb::Babble | Verb::Caution)
    }

    pub fn stream(self) -> Stream {
        match self {
            Verb::Mention | Verb::Babble => Stream::Stdout,
            Verb::Warn | Verb::Caution => Stream::Stderr,
        }
    }
}

/// A configuration change applied to an [`Emitter`]
///
/// Settings are applied in order, so a later setting overrides an earlier one
/// touching the same field.
pub enum Setting {
    /// Share this flag as the verbose switch
    Verbose(Flag),
    /// Share this flag as the quiet switch
    Quiet(Flag),
    /// Share this flag as the sync-after-write switch
    Sync(Flag),
    Stdout(Destination),
    Stderr(Destination),
    /// Append a line break to every message (the default)
    AutoNewline(bool),
    /// Collaborator that ends the program on `die`
    Abort(Arc<dyn Abort>),
}

impl Setting {
    pub fn abort(abort: impl Abort + 'static) -> Self {
        Self::Abort(Arc::new(abort))
    }

    pub fn apply(self, emitter: &mut Emitter) {
        match self {
            Setting::Verbose(flag) => emitter.verbose = flag,
            Setting::Quiet(flag) => emitter.quiet = flag,
            Setting::Sync(flag) => emitter.sync = flag,
            Setting::Stdout(destination) => emitter.stdout = destination,
            Setting::Stderr(destination) => emitter.stderr = destination,
            Setting::AutoNewline(auto) => emitter.auto_newline = auto,
            Setting::Abort(abort) => emitter.abort = abort,
        }
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Verbose(flag) => f.debug_tuple("Verbose").field(flag).finish(),
            Setting::Quiet(flag) => f.debug_tuple("Quiet").field(flag).finish(),
            Setting::Sync(flag) => f.debug_tuple("Sync").field(flag).finish(),
            Setting::Stdout(dest) => f.debug_tuple("Stdout").field(dest).finish(),
            Setting::Stderr(dest) => f.debug_tuple("Stderr").field(dest).finish(),
            Setting::AutoNewline(auto) => f.debug_tuple("AutoNewline").field(auto).finish(),
            Setting::Abort(_) => f.write_str("Abort(..)"),
        }
    }
}

/// Space-separated rendering of several values
///
/// Backs the multi-argument macros: `mention!("copied", n, "files")` renders
/// as `copied 3 files`.
pub struct Words<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Words<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Policy-gated console output
///
/// Cloning an emitter shares its flags and destinations with the clone.
#[derive(Clone)]
pub struct Emitter {
    verbose: Flag,
    quiet: Flag,
    sync: Flag,
    auto_newline: bool,
    stdout: Destination,
    stderr: Destination,
    abort: Arc<dyn Abort>,
}

impl Emitter {
    /// Build an emitter with private flags (all false), the standard streams,
    /// auto-newline on, and [`Exit`] as the abort collaborator, then apply
    /// `settings` in order.
    pub fn new(settings: impl IntoIterator<Item = Setting>) -> Self {
        let mut emitter = Self {
            verbose: Flag::default(),
            quiet: Flag::default(),
            sync: Flag::default(),
            auto_newline: true,
            stdout: Destination::stdout(),
            stderr: Destination::stderr(),
            abort: Arc::new(Exit::default()),
        };
        emitter.configure(settings);
        emitter
    }

    /// Copy this emitter's configuration, sharing its flags and destinations,
    /// then apply `settings` to the copy
    pub fn clone_with(&self, settings: impl IntoIterator<Item = Setting>) -> Self {
        let mut emitter = self.clone();
        emitter.configure(settings);
        emitter
    }

    pub fn configure(&mut self, settings: impl IntoIterator<Item = Setting>) {
        for setting in settings {
            setting.apply(self);
        }
    }

    // Setters: `Some` installs the value and returns the one it replaced;
    // `None` returns the current value and changes nothing.

    pub fn set_verbose_flag(&mut self, flag: Option<Flag>) -> Flag {
        swap_or_read(&mut self.verbose, flag)
    }

    pub fn set_quiet_flag(&mut self, flag: Option<Flag>) -> Flag {
        swap_or_read(&mut self.quiet, flag)
    }

    pub fn set_sync_flag(&mut self, flag: Option<Flag>) -> Flag {
        swap_or_read(&mut self.sync, flag)
    }

    pub fn set_stdout(&mut self, destination: Option<Destination>) -> Destination {
        swap_or_read(&mut self.stdout, destination)
    }

    pub fn set_stderr(&mut self, destination: Option<Destination>) -> Destination {
        swap_or_read(&mut self.stderr, destination)
    }

    /// Returns the previous mode
    pub fn set_auto_newline(&mut self, auto: bool) -> bool {
        std::mem::replace(&mut self.auto_newline, auto)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.get()
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.get()
    }

    pub fn is_sync(&self) -> bool {
        self.sync.get()
    }

    pub fn auto_newline(&self) -> bool {
        self.auto_newline
    }

    /// Clear all three flags and point both destinations back at the
    /// standard streams
    ///
    /// The flags are cleared through the shared handles, so every other
    /// holder of those flags sees them cleared too. Auto-newline is untouched.
    pub fn reset(&mut self) {
        self.verbose.set(false);
        self.quiet.set(false);
        self.sync.set(false);
        self.stdout = Destination::stdout();
        self.stderr = Destination::stderr();
    }

    fn emit(&self, gated: bool, destination: &Destination, message: impl fmt::Display) {
        if self.quiet.get() || (gated && !self.verbose.get()) {
            return;
        }

        let mut rendered = message.to_string();
        if self.auto_newline {
            rendered.push('\n');
        }

        if let Err(err) = destination.write(rendered.as_bytes(), self.sync.get()) {
            log::debug!("Dropped output to {destination:?}: {err}");
        }
    }

    /// Emit `message` with the policy and destination of `verb`
    pub fn say(&self, verb: Verb, message: impl fmt::Display) {
        let destination = match verb.stream() {
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        };
        self.emit(verb.is_verbose_gated(), destination, message);
    }

    pub fn mention(&self, message: impl fmt::Display) {
        self.say(Verb::Mention, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.say(Verb::Warn, message);
    }

    pub fn babble(&self, message: impl fmt::Display) {
        self.say(Verb::Babble, message);
    }

    pub fn caution(&self, message: impl fmt::Display) {
        self.say(Verb::Caution, message);
    }

    pub fn mentionf(&self, args: fmt::Arguments<'_>) {
        self.mention(args);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.warn(args);
    }

    pub fn babblef(&self, args: fmt::Arguments<'_>) {
        self.babble(args);
    }

    pub fn cautionf(&self, args: fmt::Arguments<'_>) {
        self.caution(args);
    }

    /// Hand `message` to the abort collaborator, which ends the program
    ///
    /// When quiet, the collaborator gets `None` instead of the error.
    pub fn die(&self, message: impl fmt::Display) -> ! {
        let error = (!self.quiet.get()).then(|| Fatal::new(message.to_string()));
        self.abort.abort(error.as_ref())
    }

    pub fn dief(&self, args: fmt::Arguments<'_>) -> ! {
        self.die(args)
    }
}

fn swap_or_read<T: Clone>(slot: &mut T, value: Option<T>) -> T {
    match value {
        Some(value) => std::mem::replace(slot, value),
        None => slot.clone(),
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new([])
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("verbose", &self.verbose)
            .field("quiet", &self.quiet)
            .field("sync", &self.sync)
            .field("auto_newline", &self.auto_newline)
            .field("stdout", &self.stdout)
            .field("stderr", &self.stderr)
            .finish_non_exhaustive()
    }
}
