//! Runtime rendering of `{fmt}`-style templates.
//!
//! This module provides:
//! - `Template`: A parsed template borrowing its source text
//! - `Piece`: Literal text or a replacement field inside a template
//! - `FormatValue`: Trait for values that can fill a replacement field
//! - `StandardSpec`: The parsed `[[fill]align][sign]['#']['0'][width]['.'precision][type]` spec
//!
//! A template is literal text with replacement fields written as
//! `{[arg_id][:spec]}`. `{{` and `}}` stand for literal braces. Sinks render
//! exactly one value per write, so the only argument a field may refer to is
//! argument `0`.

mod chrono;
mod spec;
mod value;

pub use spec::{Align, Sign, StandardSpec};
pub use value::FormatValue;

use crate::error::FormatError;

/// One piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Literal text, with brace escapes already resolved
    Literal(&'a str),
    /// A replacement field for the value
    Field {
        /// Text between ':' and '}' (empty when there is no ':')
        spec: &'a str,
        /// Byte offset of the opening brace
        offset: usize,
    },
}

/// A template split into literal text and replacement fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    pieces: Vec<Piece<'a>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Indexing {
    Unknown,
    Automatic,
    Manual,
}

impl<'a> Template<'a> {
    /// Parse a template.
    pub fn parse(source: &'a str) -> Result<Self, FormatError> {
        let bytes = source.as_bytes();
        let mut pieces = Vec::new();
        let mut indexing = Indexing::Unknown;
        let mut start = 0;
        let mut i = 0;

        let invalid = |offset: usize, reason: &'static str| FormatError::InvalidTemplate {
            template: source.to_owned(),
            offset,
            reason,
        };

        while i < bytes.len() {
            match bytes[i] {
                b'{' => {
                    if start < i {
                        pieces.push(Piece::Literal(&source[start..i]));
                    }
                    if bytes.get(i + 1) == Some(&b'{') {
                        pieces.push(Piece::Literal(&source[i..i + 1]));
                        i += 2;
                        start = i;
                        continue;
                    }

                    let offset = i;
                    let close = source[i + 1..]
                        .find('}')
                        .map(|p| p + i + 1)
                        .ok_or_else(|| invalid(offset, "missing '}' in format string"))?;
                    let field = &source[i + 1..close];
                    let (arg_id, spec) = match field.find(':') {
                        Some(colon) => (&field[..colon], &field[colon + 1..]),
                        None => (field, ""),
                    };

                    if spec.contains('{') {
                        // Nested fields (dynamic width/precision) need a second argument.
                        return Err(FormatError::ArgumentNotFound {
                            template: source.to_owned(),
                            offset,
                        });
                    }

                    if arg_id.is_empty() {
                        match indexing {
                            Indexing::Manual => {
                                return Err(invalid(
                                    offset,
                                    "cannot switch from manual to automatic argument indexing",
                                ));
                            }
                            Indexing::Automatic => {
                                return Err(FormatError::ArgumentNotFound {
                                    template: source.to_owned(),
                                    offset,
                                });
                            }
                            Indexing::Unknown => indexing = Indexing::Automatic,
                        }
                    } else {
                        if indexing == Indexing::Automatic {
                            return Err(invalid(
                                offset,
                                "cannot switch from automatic to manual argument indexing",
                            ));
                        }
                        indexing = Indexing::Manual;
                        let index: usize = arg_id
                            .parse()
                            .map_err(|_| invalid(offset, "invalid argument id"))?;
                        if index != 0 {
                            return Err(FormatError::ArgumentNotFound {
                                template: source.to_owned(),
                                offset,
                            });
                        }
                    }

                    pieces.push(Piece::Field { spec, offset });
                    i = close + 1;
                    start = i;
                }
                b'}' => {
                    if bytes.get(i + 1) != Some(&b'}') {
                        return Err(invalid(i, "unmatched '}' in format string"));
                    }
                    if start < i {
                        pieces.push(Piece::Literal(&source[start..i]));
                    }
                    pieces.push(Piece::Literal(&source[i..i + 1]));
                    i += 2;
                    start = i;
                }
                _ => i += 1,
            }
        }

        if start < bytes.len() {
            pieces.push(Piece::Literal(&source[start..]));
        }

        Ok(Self { source, pieces })
    }

    /// The text the template was parsed from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The parsed pieces, in order.
    pub fn pieces(&self) -> &[Piece<'a>] {
        &self.pieces
    }

    /// Number of replacement fields in the template.
    pub fn placeholder_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Field { .. }))
            .count()
    }

    /// Render `value` into every replacement field, appending to `out`.
    pub fn render_into<T>(&self, value: &T, out: &mut String) -> Result<(), FormatError>
    where
        T: FormatValue + ?Sized,
    {
        for piece in &self.pieces {
            match *piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Field { spec, .. } => {
                    value
                        .format_into(spec, out)
                        .map_err(|reason| FormatError::InvalidSpec {
                            spec: spec.to_owned(),
                            value_kind: value.kind(),
                            reason,
                        })?
                }
            }
        }
        Ok(())
    }

    /// Render `value` into a new string.
    pub fn render<T>(&self, value: &T) -> Result<String, FormatError>
    where
        T: FormatValue + ?Sized,
    {
        let mut out = String::with_capacity(self.source.len() + 8);
        self.render_into(value, &mut out)?;
        Ok(out)
    }
}

/// Parse `template` and render `value` into it.
pub fn format<T>(template: &str, value: &T) -> Result<String, FormatError>
where
    T: FormatValue + ?Sized,
{
    Template::parse(template)?.render(value)
}
