//! The process-wide default emitter
//!
//! Everything here mutates shared global state, so it runs as one test in its
//! own test binary.

use chatter::{Buffer, Destination, Flag, Setting};

#[test]
fn default_emitter_lifecycle() {
    let quiet = Flag::default();
    let verbose = Flag::default();
    let out = Buffer::default();
    let err = Buffer::default();

    chatter::defaults([
        Setting::Quiet(quiet.clone()),
        Setting::Verbose(verbose.clone()),
        Setting::Stdout(out.clone().into()),
        Setting::Stderr(err.clone().into()),
    ]);

    // Free functions and macros route through the default
    chatter::mention("plain");
    chatter::mention!("copied", 3, "files");
    chatter::warnf!("{}-{}", "x", 3);
    chatter::warn("x-3");
    chatter::babble!("hidden");
    chatter::cautionf!("hidden {}", 1);
    assert_eq!(out.take(), "plain\ncopied 3 files\n");
    assert_eq!(err.take(), "x-3\nx-3\n");

    // Toggling a shared flag is seen on the next call
    verbose.set(true);
    chatter::babblef!("{} of {}", 1, 2);
    chatter::caution!("careful");
    chatter::say(chatter::Verb::Mention, "said");
    assert_eq!(out.take(), "1 of 2\nsaid\n");
    assert_eq!(err.take(), "careful\n");

    quiet.set(true);
    chatter::mention!("nothing");
    chatter::warn!("at", "all");
    chatter::mentionf(format_args!("{}", "still nothing"));
    assert!(out.is_empty() && err.is_empty());
    quiet.set(false);

    // A clone of the default shares its flags but may redirect
    let redirected = Buffer::default();
    let clone = chatter::clone_default([Setting::Stdout(redirected.clone().into())]);
    clone.mention("to the clone");
    verbose.set(false);
    clone.babble("hidden again");
    assert_eq!(redirected.take(), "to the clone\n");
    assert!(out.is_empty());

    // Clones also take the default's newline mode
    chatter::defaults([Setting::AutoNewline(false)]);
    let unbroken = Buffer::default();
    chatter::clone_default([Setting::Stdout(unbroken.clone().into())]).mention("a");
    chatter::clone_default([Setting::Stdout(unbroken.clone().into())]).mention("b");
    assert_eq!(unbroken.take(), "ab");
    chatter::defaults([Setting::AutoNewline(true)]);

    // Setters through with_default return the value they replaced
    let scratch = Buffer::default();
    let scratch_dest = Destination::from(scratch.clone());
    let saved = chatter::with_default(|e| e.set_stderr(Some(scratch_dest.clone())));
    chatter::warn("scratch");
    let replaced = chatter::with_default(|e| e.set_stderr(Some(saved)));
    assert_eq!(replaced, scratch_dest);
    chatter::warn("restored");
    assert_eq!(scratch.take(), "scratch\n");
    assert_eq!(err.take(), "restored\n");

    // Reset clears the shared flags and restores the standard streams
    verbose.set(true);
    quiet.set(true);
    chatter::reset_defaults();
    assert!(!verbose.get() && !quiet.get());
    chatter::with_default(|e| {
        assert_eq!(e.set_stdout(None), Destination::stdout());
        assert_eq!(e.set_stderr(None), Destination::stderr());
        assert!(e.auto_newline());
    });
}
