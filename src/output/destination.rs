//! Output destinations
//!
//! A [`Destination`] is a cheap, cloneable handle to a [`Sink`]. Emitters hold
//! handles rather than owning streams: cloning an emitter shares its
//! destinations, and nothing here ever closes the underlying stream.
//!
//! Built-in sinks:
//! - the process's standard output / standard error (bytes passed through
//!   unchanged, syncable via flush)
//! - [`Buffer`], a shared in-memory capture (not syncable)
//! - [`FileSink`], a file synced with `sync_all`
//! - [`Flushing`], any writer, synced with `flush`
//! - [`Plain`], any writer, no sync capability

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::traits::{Sink, Syncable};

/// The two standard process streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Standard(Stream),
    Custom,
}

/// Shared handle to somewhere messages are written
///
/// Standard-stream destinations compare equal by stream, so a fresh
/// `Destination::stdout()` equals any other. Custom destinations compare by
/// handle identity.
#[derive(Clone)]
pub struct Destination {
    origin: Origin,
    sink: Arc<Mutex<dyn Sink>>,
}

impl Destination {
    /// The process's standard output
    pub fn stdout() -> Self {
        Self::standard(Stream::Stdout)
    }

    /// The process's standard error
    pub fn stderr() -> Self {
        Self::standard(Stream::Stderr)
    }

    pub fn standard(stream: Stream) -> Self {
        let sink = match stream {
            Stream::Stdout => StandardSink::Out(passthrough(io::stdout())),
            Stream::Stderr => StandardSink::Err(passthrough(io::stderr())),
        };
        Self {
            origin: Origin::Standard(stream),
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// Wrap a custom sink
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            origin: Origin::Custom,
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// Which standard stream this is, if any
    pub fn stream(&self) -> Option<Stream> {
        match self.origin {
            Origin::Standard(stream) => Some(stream),
            Origin::Custom => None,
        }
    }

    pub fn is_standard(&self, stream: Stream) -> bool {
        self.stream() == Some(stream)
    }

    /// Write `bytes`, then sync if asked and the sink supports it
    pub(crate) fn write(&self, bytes: &[u8], sync: bool) -> io::Result<()> {
        let mut sink = self.lock();
        sink.write_all(bytes)?;
        if sync && let Some(syncable) = sink.as_syncable() {
            syncable.sync()?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, dyn Sink + 'static> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: Sink + 'static> From<S> for Destination {
    fn from(sink: S) -> Self {
        Self::new(sink)
    }
}

impl PartialEq for Destination {
    fn eq(&self, other: &Self) -> bool {
        match (self.origin, other.origin) {
            (Origin::Standard(a), Origin::Standard(b)) => a == b,
            (Origin::Custom, Origin::Custom) => Arc::ptr_eq(&self.sink, &other.sink),
            _ => false,
        }
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            Origin::Standard(stream) => write!(f, "Destination({stream})"),
            Origin::Custom => f.write_str("Destination(custom)"),
        }
    }
}

/// Messages are written byte for byte: escape sequences a caller put in a
/// message reach the stream even when it is piped or `NO_COLOR` is set
fn passthrough<S: anstream::stream::RawStream>(stream: S) -> anstream::AutoStream<S> {
    anstream::AutoStream::new(stream, anstream::ColorChoice::AlwaysAnsi)
}

/// Standard streams
enum StandardSink {
    Out(anstream::Stdout),
    Err(anstream::Stderr),
}

impl Write for StandardSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Out(out) => out.write(buf),
            Self::Err(err) => err.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Out(out) => out.flush(),
            Self::Err(err) => err.flush(),
        }
    }
}

impl Sink for StandardSink {
    fn as_syncable(&mut self) -> Option<&mut dyn Syncable> {
        Some(self)
    }
}

impl Syncable for StandardSink {
    fn sync(&mut self) -> io::Result<()> {
        self.flush()
    }
}

/// In-memory capture, shared between clones
///
/// Install one clone as a destination and read the other:
///
/// ```
/// use chatter::{Buffer, Emitter, Setting};
///
/// let out = Buffer::default();
/// let emitter = Emitter::new([Setting::Stdout(out.clone().into())]);
/// emitter.mention("hello");
/// assert_eq!(out.contents(), "hello\n");
/// ```
#[derive(Clone, Default)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Drain everything written so far
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for Buffer {}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Buffer").field(&self.contents()).finish()
    }
}

/// A file, synced to disk with `sync_all`
#[derive(Debug)]
pub struct FileSink(pub File);

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl Sink for FileSink {
    fn as_syncable(&mut self) -> Option<&mut dyn Syncable> {
        Some(self)
    }
}

impl Syncable for FileSink {
    fn sync(&mut self) -> io::Result<()> {
        self.0.sync_all()
    }
}

/// Any writer, synced with `flush`
#[derive(Debug)]
pub struct Flushing<W>(pub W);

impl<W: Write> Write for Flushing<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<W: Write + Send> Sink for Flushing<W> {
    fn as_syncable(&mut self) -> Option<&mut dyn Syncable> {
        Some(self)
    }
}

impl<W: Write> Syncable for Flushing<W> {
    fn sync(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// Any writer, without a sync capability
#[derive(Debug)]
pub struct Plain<W>(pub W);

impl<W: Write> Write for Plain<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<W: Write + Send> Sink for Plain<W> {}
