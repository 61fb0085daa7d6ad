//! # printsink
//!
//! Drive a formatted-output destination through a generic output sink.
//!
//! ## Overview
//!
//! printsink provides:
//! - **`PrintSink`**: Binds a template with one replacement field to a destination;
//!   every assigned value is rendered and written immediately
//! - **Two destination kinds**: A raw handle (stdout, stderr, a `File`) or any
//!   caller-owned `std::io::Write` stream
//! - **Generic algorithms**: `copy` and `transform` write whole sequences into any `OutputSink`
//! - **Runtime templates**: `{fmt}`-style fields (`{}`, `{:02d}`, `{:>8.2f}`, `{:%H:%M:%S}`)
//!   rendered at write time
//! - **Configuration**: Describe a sink's template and target with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use printsink::{PrintSink, copy};
//!
//! fn main() -> Result<(), printsink::FormatError> {
//!     // Writes "$100" to stdout.
//!     let mut price = PrintSink::<i32>::with_template("${}");
//!     price.assign(100)?;
//!
//!     let log = RefCell::new(Vec::new());
//!     copy(1..=12, PrintSink::<i32>::with_stream("{:02d}:00 UTC\n", &log))?;
//!     assert!(log.borrow().starts_with(b"01:00 UTC\n02:00 UTC\n"));
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! - The template should contain exactly one replacement field. It is not
//!   validated when the sink is built; use `Template::parse` and
//!   `Template::placeholder_count` to check it up front.
//! - Each write is independent: the sink keeps no buffer or counter and never
//!   flushes or closes its destination.
//! - Errors from parsing the template, applying the spec, or writing are
//!   returned to the caller as `FormatError`.
//!
//! ## Features
//!
//! - `json` / `yaml` / `toml` - Load a `SinkConfig` from these formats
//! - `async` - `AsyncPrintSink` over tokio's `AsyncWrite`
//! - `miette` - Pretty error reporting with miette
//! - `cli` - The `printsink` binary (enabled by default)

// Core modules
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod sink;
pub mod template;

// Re-exports for convenience
pub use config::{FileExistsPolicy, OpenedTarget, SinkConfig, TargetConfig};
pub use error::{ConfigError, FormatError, Stage};
pub use io::{Destination, RawHandle};
pub use sink::{
    DEFAULT_TEMPLATE, IteratorTraits, OutputSink, OutputTag, PrintSink, copy, transform,
};
pub use template::{FormatValue, Template, format};

// Async re-exports
#[cfg(feature = "async")]
pub use sink::{AsyncOutputSink, AsyncPrintSink, copy_stream};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::FormatDiagnostic;
