//! Sink and target specifications.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::io::RawHandle;
use crate::sink::{DEFAULT_TEMPLATE, PrintSink};
use crate::template::FormatValue;

/// Policy for handling existing output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileExistsPolicy {
    /// Overwrite existing files
    Overwrite,
    /// Append to existing files
    Append,
    #[default]
    /// Return an error if file exists
    Error,
}

impl FileExistsPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Some(FileExistsPolicy::Overwrite),
            "append" => Some(FileExistsPolicy::Append),
            "error" => Some(FileExistsPolicy::Error),
            _ => None,
        }
    }

    /// Open `path` for writing according to this policy.
    pub fn open(self, path: &Path) -> Result<File, ConfigError> {
        let mut options = OpenOptions::new();
        match self {
            FileExistsPolicy::Overwrite => options.create(true).truncate(true).write(true),
            FileExistsPolicy::Append => options.create(true).append(true),
            FileExistsPolicy::Error => options.create_new(true).write(true),
        };
        options.open(path).map_err(|source| {
            let path = path.to_string_lossy().into_owned();
            if source.kind() == io::ErrorKind::AlreadyExists {
                ConfigError::FileExists(path)
            } else {
                ConfigError::Open { path, source }
            }
        })
    }
}

/// Configuration for a single sink: a template and where it writes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SinkConfig {
    /// Template with one replacement field; defaults to "{}"
    #[serde(default)]
    pub template: Option<String>,
    /// Where rendered values go; defaults to stdout
    #[serde(default)]
    pub target: TargetConfig,
}

/// Configuration for a sink's destination.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Kind of output: "stdout", "stderr" or "file"
    pub kind: String,
    /// File path (for file outputs)
    #[serde(default)]
    pub path: Option<String>,
    /// File exists policy: "overwrite", "append", "error"
    #[serde(default)]
    pub file_exists_policy: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            kind: "stdout".into(),
            path: None,
            file_exists_policy: None,
        }
    }
}

impl TargetConfig {
    /// A target writing to stdout.
    pub fn stdout() -> Self {
        Self::default()
    }

    /// A target writing to stderr.
    pub fn stderr() -> Self {
        Self {
            kind: "stderr".into(),
            ..Self::default()
        }
    }

    /// A target writing to the file at `path`.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: "file".into(),
            path: Some(path.into()),
            file_exists_policy: None,
        }
    }

    /// Set the file exists policy.
    pub fn with_file_exists_policy(mut self, policy: impl Into<String>) -> Self {
        self.file_exists_policy = Some(policy.into());
        self
    }

    /// Resolve the target, opening the file for file targets.
    pub fn open(&self) -> Result<OpenedTarget, ConfigError> {
        let target = match self.kind.to_ascii_lowercase().as_str() {
            "stdout" | "-" => OpenedTarget::Stdout,
            "stderr" => OpenedTarget::Stderr,
            "file" => {
                let path = PathBuf::from(self.path.as_deref().ok_or(ConfigError::MissingPath)?);
                let policy = match &self.file_exists_policy {
                    Some(raw) => FileExistsPolicy::from_str(raw)
                        .ok_or_else(|| ConfigError::UnknownPolicy(raw.clone()))?,
                    None => FileExistsPolicy::default(),
                };
                let file = policy.open(&path)?;
                OpenedTarget::File { path, file }
            }
            _ => return Err(ConfigError::UnknownKind(self.kind.clone())),
        };
        debug!(dest = %target.id(), "opened sink target");
        Ok(target)
    }
}

/// A resolved target. Owns the opened file, if any; sinks borrow it.
#[derive(Debug)]
pub enum OpenedTarget {
    Stdout,
    Stderr,
    File { path: PathBuf, file: File },
}

impl OpenedTarget {
    /// Identifier for logs and errors: "-", "stderr", or the file path.
    pub fn id(&self) -> String {
        match self {
            OpenedTarget::Stdout => "-".into(),
            OpenedTarget::Stderr => "stderr".into(),
            OpenedTarget::File { path, .. } => path.to_string_lossy().into_owned(),
        }
    }

    /// The raw handle a sink writes through.
    pub fn handle(&self) -> RawHandle<'_> {
        match self {
            OpenedTarget::Stdout => RawHandle::Stdout,
            OpenedTarget::Stderr => RawHandle::Stderr,
            OpenedTarget::File { file, .. } => RawHandle::File(file),
        }
    }
}

impl SinkConfig {
    /// Create a configuration writing `template` to stdout.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            target: TargetConfig::default(),
        }
    }

    /// Set the target.
    pub fn with_target(mut self, target: TargetConfig) -> Self {
        self.target = target;
        self
    }

    /// The configured template, or "{}".
    pub fn template(&self) -> &str {
        self.template.as_deref().unwrap_or(DEFAULT_TEMPLATE)
    }

    /// Resolve the configured target.
    pub fn open(&self) -> Result<OpenedTarget, ConfigError> {
        self.target.open()
    }

    /// Build a sink for this configuration over an opened target.
    pub fn sink<'a, T>(&'a self, target: &'a OpenedTarget) -> PrintSink<'a, T>
    where
        T: FormatValue + ?Sized,
    {
        PrintSink::with_handle(self.template(), target.handle())
    }

    /// Parse a configuration from JSON.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    /// Parse a configuration from YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(s).map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    /// Parse a configuration from TOML.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(Box::new(e)))
    }
}
