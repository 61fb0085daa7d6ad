//! Async formatting sink over a tokio `AsyncWrite`.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::error::FormatError;
use crate::template::{self, FormatValue};

/// Async counterpart of `OutputSink`.
#[async_trait]
pub trait AsyncOutputSink<T: ?Sized + Sync>: Send {
    /// Error returned by a failed put
    type Error: Send;

    /// Write one value.
    async fn put(&mut self, value: &T) -> Result<(), Self::Error>;
}

/// Writes each value, formatted through a fixed template, to a borrowed
/// `AsyncWrite`.
///
/// Like `PrintSink` it never buffers or flushes: each put awaits one
/// `write_all` on the writer.
pub struct AsyncPrintSink<'a, T: ?Sized, W: ?Sized> {
    template: &'a str,
    out: &'a mut W,
    _value: PhantomData<fn(&T)>,
}

impl<T: ?Sized, W: ?Sized> fmt::Debug for AsyncPrintSink<'_, T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncPrintSink")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl<'a, T, W> AsyncPrintSink<'a, T, W>
where
    T: FormatValue + ?Sized,
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    /// A sink writing `template` to `out`.
    pub fn new(template: &'a str, out: &'a mut W) -> Self {
        Self {
            template,
            out,
            _value: PhantomData,
        }
    }

    /// The template this sink was built with.
    pub fn template(&self) -> &'a str {
        self.template
    }
}

#[async_trait]
impl<'a, T, W> AsyncOutputSink<T> for AsyncPrintSink<'a, T, W>
where
    T: FormatValue + Sync + ?Sized,
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    type Error = FormatError;

    async fn put(&mut self, value: &T) -> Result<(), FormatError> {
        let rendered = template::format(self.template, value)?;
        self.out.write_all(rendered.as_bytes()).await?;
        trace!(
            template = self.template,
            bytes = rendered.len(),
            "wrote formatted value"
        );
        Ok(())
    }
}
