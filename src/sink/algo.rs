//! Sequence algorithms that write into an `OutputSink`.

use std::borrow::Borrow;

use super::OutputSink;

/// Put every element of `source` into `sink`, in order, and return the sink.
///
/// Stops at the first failed put.
pub fn copy<I, T, S>(source: I, mut sink: S) -> Result<S, S::Error>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: ?Sized,
    S: OutputSink<T>,
{
    for item in source {
        sink.put(item.borrow())?;
    }
    Ok(sink)
}

/// Map every element of `source` through `f` and put the result into `sink`.
pub fn transform<I, F, T, S>(source: I, mut sink: S, mut f: F) -> Result<S, S::Error>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> T,
    S: OutputSink<T>,
{
    for item in source {
        sink.put(&f(item))?;
    }
    Ok(sink)
}

/// Drain `source` into an async sink, in order, and return the sink.
#[cfg(feature = "async")]
pub async fn copy_stream<St, T, S>(source: St, mut sink: S) -> Result<S, S::Error>
where
    St: futures::Stream<Item = T>,
    T: Sync,
    S: super::AsyncOutputSink<T>,
{
    use futures::StreamExt;

    let mut source = std::pin::pin!(source);
    while let Some(item) = source.next().await {
        sink.put(&item).await?;
    }
    Ok(sink)
}
