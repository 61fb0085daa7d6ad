//! Capability traits for write-only sinks.

/// A write-only endpoint that generic code can put values into one at a time.
pub trait OutputSink<T: ?Sized> {
    /// Error returned by a failed put
    type Error;

    /// Write one value.
    fn put(&mut self, value: &T) -> Result<(), Self::Error>;
}

impl<T: ?Sized, S: OutputSink<T> + ?Sized> OutputSink<T> for &mut S {
    type Error = S::Error;

    fn put(&mut self, value: &T) -> Result<(), Self::Error> {
        (**self).put(value)
    }
}

/// Category tag for sinks that can only be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputTag;

/// Type-level description of an iterator-like endpoint.
///
/// Output-only sinks have no readable value, so `Value` and `Reference` are `()`.
pub trait IteratorTraits {
    type Value;
    type Reference;
    type Difference;
    type Category;
}
