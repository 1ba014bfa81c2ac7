//! Debian control file parsing.
//!
//! A control file is a single paragraph of `Key: value` lines. A line
//! beginning with a space or tab continues the previous field's value;
//! the leading whitespace is kept so multi-line values (descriptions)
//! re-render verbatim into a `Packages` stanza.

use thiserror::Error;

/// Errors raised while parsing control data.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ControlError {
    /// A non-continuation line had no `:` separator.
    #[error("line {0} has no field separator")]
    MissingSeparator(usize),

    /// A continuation line appeared before any field.
    #[error("continuation on line {0} without a preceding field")]
    OrphanContinuation(usize),

    /// The input contained no fields at all.
    #[error("control data contains no fields")]
    Empty,
}

/// A parsed control paragraph with case-insensitive field lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlFile {
    fields: Vec<(String, String)>,
}

impl ControlFile {
    /// Parse a control paragraph.
    ///
    /// Parsing stops at the first blank line. When a field name occurs
    /// more than once, the first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns a [`ControlError`] if a line has no separator, a
    /// continuation precedes any field, or the input has no fields.
    pub fn parse(text: &str) -> Result<Self, ControlError> {
        let mut fields: Vec<(String, String)> = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            if line.is_empty() {
                break;
            }
            if line.starts_with(' ') || line.starts_with('\t') {
                let Some((_, value)) = fields.last_mut() else {
                    return Err(ControlError::OrphanContinuation(idx + 1));
                };
                value.push('\n');
                value.push_str(line);
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                return Err(ControlError::MissingSeparator(idx + 1));
            };
            fields.push((key.trim().to_string(), value.trim().to_string()));
        }

        if fields.is_empty() {
            return Err(ControlError::Empty);
        }
        Ok(Self { fields })
    }

    /// Look up a field value, matching the name case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
