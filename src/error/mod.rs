//! Error types for rendering and writing formatted values.
//!
//! This module provides:
//! - `Stage`: Indicates where a write failed (template parse, render, or I/O)
//! - `FormatError`: The error returned by every sink write
//! - `ConfigError`: Errors raised while resolving a `SinkConfig`

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while parsing the template's braces and argument ids
    Parse,
    /// Error while applying a format spec to the value
    Render,
    /// Error while writing the rendered text to the destination
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Parse => write!(f, "Parse"),
            Stage::Render => write!(f, "Render"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// Errors that can occur while formatting a value into a template and writing it.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The template's replacement fields are malformed
    #[error("invalid format string at byte {offset}: {reason}")]
    InvalidTemplate {
        template: String,
        offset: usize,
        reason: &'static str,
    },

    /// A replacement field refers to an argument other than the single value
    #[error("argument not found at byte {offset}")]
    ArgumentNotFound { template: String, offset: usize },

    /// The format spec cannot be applied to the value's type
    #[error("invalid format specifier '{spec}' for {value_kind}: {reason}")]
    InvalidSpec {
        spec: String,
        value_kind: &'static str,
        reason: &'static str,
    },

    /// Writing to the destination failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    /// The stage of a write at which this error was raised.
    pub fn stage(&self) -> Stage {
        match self {
            FormatError::InvalidTemplate { .. } | FormatError::ArgumentNotFound { .. } => {
                Stage::Parse
            }
            FormatError::InvalidSpec { .. } => Stage::Render,
            FormatError::Io(_) => Stage::Write,
        }
    }

    /// Byte offset into the template, for errors that have one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            FormatError::InvalidTemplate { offset, .. }
            | FormatError::ArgumentNotFound { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

/// Errors raised while resolving a sink configuration into a destination.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Target kind is not one of "stdout", "stderr" or "file"
    #[error("unknown target kind: {0}")]
    UnknownKind(String),

    /// File exists policy is not one of "overwrite", "append" or "error"
    #[error("unknown file exists policy: {0}")]
    UnknownPolicy(String),

    /// A file target was configured without a path
    #[error("file target requires a path")]
    MissingPath,

    /// The output file exists and the policy forbids touching it
    #[error("output file already exists: {0}")]
    FileExists(String),

    /// The output file could not be opened
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document could not be parsed
    #[error("config parse error: {0}")]
    Parse(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
