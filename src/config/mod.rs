//! Configuration types for sinks.
//!
//! This module provides:
//! - `SinkConfig`: A template plus a target, deserializable with serde
//! - `TargetConfig`: Where a sink writes (stdout, stderr, or a file)
//! - `FileExistsPolicy`: Policy for handling existing output files
//! - `OpenedTarget`: A resolved target that sinks borrow their handle from

mod spec;

pub use spec::{FileExistsPolicy, OpenedTarget, SinkConfig, TargetConfig};
