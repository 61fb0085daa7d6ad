//! The formatting output sink.
//!
//! `PrintSink<T>` binds a template to a destination. Every value assigned to
//! it is rendered into the template and written straight to the destination:
//!
//! ```rust
//! use std::cell::RefCell;
//! use printsink::PrintSink;
//!
//! let out = RefCell::new(Vec::new());
//! let sink = PrintSink::<i32>::with_stream("{:02d}:00 UTC\n", &out);
//! printsink::copy(1..=3, sink).unwrap();
//! assert_eq!(out.into_inner(), b"01:00 UTC\n02:00 UTC\n03:00 UTC\n");
//! ```

mod algo;
mod traits;

#[cfg(feature = "async")]
mod async_sink;

pub use algo::{copy, transform};
pub use traits::{IteratorTraits, OutputSink, OutputTag};

#[cfg(feature = "async")]
pub use algo::copy_stream;
#[cfg(feature = "async")]
pub use async_sink::{AsyncOutputSink, AsyncPrintSink};

use std::borrow::Borrow;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::marker::PhantomData;

use tracing::trace;

use crate::error::FormatError;
use crate::io::{Destination, RawHandle};
use crate::template::{self, FormatValue};

/// Template used when none is given.
pub const DEFAULT_TEMPLATE: &str = "{}";

/// Writes each assigned value, formatted through a fixed template, to a
/// destination.
///
/// The template should contain exactly one replacement field. This is not
/// checked up front; a malformed template is reported by the write that
/// renders it. The sink borrows both the template and the destination and is
/// `Copy`: copies write to the same destination.
pub struct PrintSink<'a, T: ?Sized> {
    template: &'a str,
    dest: Destination<'a>,
    _value: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Clone for PrintSink<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for PrintSink<'_, T> {}

impl<T: ?Sized> fmt::Debug for PrintSink<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintSink")
            .field("template", &self.template)
            .field("dest", &self.dest)
            .finish()
    }
}

impl<T: FormatValue + ?Sized> Default for PrintSink<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: FormatValue + ?Sized> PrintSink<'a, T> {
    /// A sink writing `"{}"` to stdout.
    pub fn new() -> Self {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// A sink writing `template` to stdout.
    pub fn with_template(template: &'a str) -> Self {
        Self::with_destination(template, Destination::default())
    }

    /// A sink writing `template` to a raw handle.
    pub fn with_handle(template: &'a str, handle: RawHandle<'a>) -> Self {
        Self::with_destination(template, Destination::Handle(handle))
    }

    /// A sink writing `template` to a caller-owned stream.
    pub fn with_stream<W: Write + 'a>(template: &'a str, stream: &'a RefCell<W>) -> Self {
        Self::with_destination(template, Destination::Stream(stream))
    }

    /// A sink writing `template` to `dest`.
    pub fn with_destination(template: &'a str, dest: Destination<'a>) -> Self {
        Self {
            template,
            dest,
            _value: PhantomData,
        }
    }

    /// The template this sink was built with.
    pub fn template(&self) -> &'a str {
        self.template
    }

    /// The destination this sink writes to.
    pub fn destination(&self) -> &Destination<'a> {
        &self.dest
    }

    /// Returns the sink itself. Does nothing.
    pub fn slot(&mut self) -> &mut Self {
        self
    }

    /// Returns the sink itself. Does nothing.
    pub fn advance(&mut self) -> &mut Self {
        self
    }

    /// Render `value` into the template and write it to the destination.
    ///
    /// Only values that borrow as `T` are accepted, so `T`, `&T` and owned
    /// forms such as `String` for `str` all work, and anything else is a
    /// compile error. Template, spec and write errors are returned unchanged.
    pub fn assign<U: Borrow<T>>(&mut self, value: U) -> Result<&mut Self, FormatError> {
        let rendered = template::format(self.template, value.borrow())?;
        self.dest.write_all(rendered.as_bytes())?;
        trace!(
            template = self.template,
            dest = self.dest.id(),
            bytes = rendered.len(),
            "wrote formatted value"
        );
        Ok(self)
    }
}

impl<T: FormatValue + ?Sized> OutputSink<T> for PrintSink<'_, T> {
    type Error = FormatError;

    fn put(&mut self, value: &T) -> Result<(), FormatError> {
        self.assign(value).map(|_| ())
    }
}

impl<T: ?Sized> IteratorTraits for PrintSink<'_, T> {
    type Value = ();
    type Reference = ();
    type Difference = i64;
    type Category = OutputTag;
}
