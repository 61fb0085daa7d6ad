//! The two destination kinds a sink can write to.

use std::cell::RefCell;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};

/// A raw output handle: one of the process's standard streams or an open file.
///
/// The handle is borrowed, never owned; writing through it does not flush or
/// close it.
#[derive(Debug, Clone, Copy, Default)]
pub enum RawHandle<'a> {
    /// The process's standard output
    #[default]
    Stdout,
    /// The process's standard error
    Stderr,
    /// A file opened by the caller
    File(&'a File),
}

impl RawHandle<'_> {
    /// Identifier used in logs: "-" for stdout, "stderr", or "file".
    pub fn id(&self) -> &'static str {
        match self {
            RawHandle::Stdout => "-",
            RawHandle::Stderr => "stderr",
            RawHandle::File(_) => "file",
        }
    }

    /// Write all of `bytes` with a single call on the handle.
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match *self {
            RawHandle::Stdout => io::stdout().lock().write_all(bytes),
            RawHandle::Stderr => io::stderr().lock().write_all(bytes),
            RawHandle::File(mut file) => file.write_all(bytes),
        }
    }
}

impl<'a> From<&'a File> for RawHandle<'a> {
    fn from(file: &'a File) -> Self {
        RawHandle::File(file)
    }
}

/// Where a sink writes: a raw handle or a borrowed character stream.
///
/// Exactly one alternative is chosen when the sink is built and it never
/// changes. Stream destinations are shared through a `RefCell`, so copies of a
/// sink write to the same stream.
#[derive(Clone, Copy)]
pub enum Destination<'a> {
    /// A raw handle (stdout, stderr, or a file)
    Handle(RawHandle<'a>),
    /// Any `Write` implementation owned by the caller
    Stream(&'a RefCell<dyn Write + 'a>),
}

impl Default for Destination<'_> {
    fn default() -> Self {
        Destination::Handle(RawHandle::Stdout)
    }
}

impl fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Handle(handle) => f.debug_tuple("Handle").field(handle).finish(),
            Destination::Stream(stream) => f
                .debug_tuple("Stream")
                .field(&std::ptr::from_ref(*stream).cast::<()>())
                .finish(),
        }
    }
}

impl<'a> From<RawHandle<'a>> for Destination<'a> {
    fn from(handle: RawHandle<'a>) -> Self {
        Destination::Handle(handle)
    }
}

impl<'a, W: Write + 'a> From<&'a RefCell<W>> for Destination<'a> {
    fn from(stream: &'a RefCell<W>) -> Self {
        Destination::Stream(stream)
    }
}

impl Destination<'_> {
    /// Identifier used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Destination::Handle(handle) => handle.id(),
            Destination::Stream(_) => "stream",
        }
    }

    /// Whether two destinations refer to the same handle or stream.
    pub fn same_as(&self, other: &Destination<'_>) -> bool {
        match (self, other) {
            (Destination::Handle(RawHandle::Stdout), Destination::Handle(RawHandle::Stdout))
            | (Destination::Handle(RawHandle::Stderr), Destination::Handle(RawHandle::Stderr)) => {
                true
            }
            (Destination::Handle(RawHandle::File(a)), Destination::Handle(RawHandle::File(b))) => {
                std::ptr::eq(*a, *b)
            }
            (Destination::Stream(a), Destination::Stream(b)) => {
                std::ptr::addr_eq(std::ptr::from_ref(*a), std::ptr::from_ref(*b))
            }
            _ => false,
        }
    }

    /// Write all of `bytes` to the active alternative.
    ///
    /// A stream that is already mutably borrowed is reported as an I/O error.
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Destination::Handle(handle) => handle.write_all(bytes),
            Destination::Stream(stream) => {
                let mut stream = stream.try_borrow_mut().map_err(|_| {
                    io::Error::new(io::ErrorKind::WouldBlock, "stream destination is already borrowed")
                })?;
                stream.write_all(bytes)
            }
        }
    }
}
