//! Destination traits
//!
//! The fundamental operation is plain writing (`Sink` is a `Write`). Forcing
//! buffered output out is an optional capability: a sink advertises it by
//! returning itself from [`Sink::as_syncable`]. Emitters probe for it on every
//! synced write and silently skip sinks that don't have it.

use std::io::{self, Write};

/// Something an emitter can write messages into
pub trait Sink: Write + Send {
    /// Capability probe for [`Syncable`]
    ///
    /// Sinks that can persist buffered output override this to return
    /// `Some(self)`. The default reports no such capability.
    fn as_syncable(&mut self) -> Option<&mut dyn Syncable> {
        None
    }
}

/// Sinks that can force buffered output to its final destination
pub trait Syncable {
    fn sync(&mut self) -> io::Result<()>;
}
