//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity, SourceSpan};
use thiserror::Error;

use super::FormatError;

/// A diagnostic wrapper for format errors compatible with miette.
///
/// Template errors carry the template as source code with a label on the
/// offending byte, so `miette` can point at it.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct FormatDiagnostic {
    /// The error message
    pub message: String,

    #[source_code]
    /// The template the error was found in, if any
    pub template: Option<String>,

    #[label("here")]
    /// Location of the error inside the template
    pub span: Option<SourceSpan>,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<FormatError> for FormatDiagnostic {
    fn from(e: FormatError) -> Self {
        let message = format!("[{}] {}", e.stage(), e);
        match e {
            FormatError::InvalidTemplate {
                template, offset, ..
            }
            | FormatError::ArgumentNotFound { template, offset } => FormatDiagnostic {
                message,
                template: Some(template),
                span: Some(SourceSpan::from(offset)),
                source: None,
                help: Some("A template takes exactly one '{}' field; write '{{' or '}}' for literal braces".into()),
                severity: Severity::Error,
            },
            FormatError::InvalidSpec { .. } => FormatDiagnostic {
                message,
                template: None,
                span: None,
                source: None,
                help: Some("Check that the format spec matches the value type".into()),
                severity: Severity::Error,
            },
            FormatError::Io(source) => FormatDiagnostic {
                message,
                template: None,
                span: None,
                source: Some(Box::new(source)),
                help: Some("Check that the destination is still writable".into()),
                severity: Severity::Error,
            },
        }
    }
}

impl From<FormatError> for miette::Report {
    fn from(e: FormatError) -> Self {
        miette::Report::new(FormatDiagnostic::from(e))
    }
}
