//! CLI integration helpers for printsink.
//!
//! This module turns command-line tokens into a `SinkConfig` and feeds
//! line-oriented input through a `PrintSink`. The `printsink` binary is a thin
//! wrapper around `run_lines`.
//!
//! # Example
//!
//! ```rust
//! use printsink::cli::{OutputArg, ValueType, run_lines};
//! use printsink::config::SinkConfig;
//!
//! let config = SinkConfig::new("{:>4}\n").with_target(OutputArg::parse("stdout").to_target(false));
//! let written = run_lines("1\n2\n".as_bytes(), &config, ValueType::Int).unwrap();
//! assert_eq!(written, 2);
//! ```

use std::io::BufRead;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::config::{SinkConfig, TargetConfig};
use crate::error::{ConfigError, FormatError};
use crate::sink::PrintSink;
use crate::template::FormatValue;

/// Errors from the line-feeding CLI pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input line could not be parsed as the requested value type
    #[error("line {line}: cannot parse '{value}' as {expected}")]
    Parse {
        line: usize,
        value: String,
        expected: &'static str,
    },

    /// The output target could not be resolved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Formatting or writing a value failed
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Reading the input failed
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
}

/// A value type name that is not "str", "int" or "float".
#[derive(Debug, Error)]
#[error("unknown value type '{0}', expected str, int or float")]
pub struct UnknownValueType(pub String);

/// How each input line is interpreted before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    /// The line itself
    #[default]
    Str,
    /// A signed 64-bit integer
    Int,
    /// A 64-bit float
    Float,
}

impl ValueType {
    /// Parse a value type from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "str" | "string" | "text" => Some(ValueType::Str),
            "int" | "integer" | "i64" => Some(ValueType::Int),
            "float" | "f64" | "double" => Some(ValueType::Float),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ValueType::Str => "str",
            ValueType::Int => "int",
            ValueType::Float => "float",
        }
    }
}

/// An output token: "-"/"stdout", "stderr", or a file path.
///
/// A leading '@' forces the rest to be read as a path, so "@stderr" is a file
/// named "stderr".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArg(String);

impl Default for OutputArg {
    fn default() -> Self {
        OutputArg("-".into())
    }
}

impl OutputArg {
    /// Normalize an output token.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.starts_with('@') {
            return OutputArg(token.to_string());
        }
        if token.is_empty() || token == "-" || token.eq_ignore_ascii_case("stdout") {
            return OutputArg("-".into());
        }
        if token.eq_ignore_ascii_case("stderr") {
            return OutputArg("stderr".into());
        }
        OutputArg(token.to_string())
    }

    /// The normalized token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if writing to stdout.
    pub fn is_stdout(&self) -> bool {
        self.0 == "-"
    }

    /// Target configuration for this token; files are appended to when
    /// `append` is set and overwritten otherwise.
    pub fn to_target(&self, append: bool) -> TargetConfig {
        match self.0.as_str() {
            "-" => TargetConfig::stdout(),
            "stderr" => TargetConfig::stderr(),
            path => {
                let path = path.strip_prefix('@').unwrap_or(path);
                let policy = if append { "append" } else { "overwrite" };
                TargetConfig::file(path).with_file_exists_policy(policy)
            }
        }
    }
}

/// Replace the escapes `\n`, `\t`, `\r` and `\\` typed on a command line.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn feed<R, T>(input: R, mut sink: PrintSink<'_, T>, ty: ValueType) -> Result<usize, CliError>
where
    R: BufRead,
    T: FormatValue + FromStr,
{
    let mut written = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let raw = match ty {
            ValueType::Str => line.trim_end_matches('\r'),
            _ => line.trim(),
        };
        let value: T = raw.parse().map_err(|_| CliError::Parse {
            line: index + 1,
            value: raw.to_string(),
            expected: ty.name(),
        })?;
        sink.slot().assign(value)?.advance();
        written += 1;
    }
    Ok(written)
}

/// Format every line of `input` through `config`'s template and target.
///
/// Returns the number of values written. Stops at the first line that fails
/// to parse, format or write.
pub fn run_lines<R: BufRead>(
    input: R,
    config: &SinkConfig,
    ty: ValueType,
) -> Result<usize, CliError> {
    let target = config.open()?;
    debug!(template = config.template(), value_type = ty.name(), "feeding lines");
    match ty {
        ValueType::Str => feed::<_, String>(input, config.sink(&target), ty),
        ValueType::Int => feed::<_, i64>(input, config.sink(&target), ty),
        ValueType::Float => feed::<_, f64>(input, config.sink(&target), ty),
    }
}

#[cfg(feature = "cli")]
mod sarge;
