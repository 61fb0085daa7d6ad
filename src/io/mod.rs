//! Output destinations for sinks.
//!
//! This module provides:
//! - `RawHandle`: stdout, stderr, or a borrowed `File`
//! - `Destination`: The tagged union of a raw handle and a borrowed stream

mod destination;

pub use destination::{Destination, RawHandle};

