//! One extracted package and its rendered index stanza.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::fields::FIELD_SCHEMA;
use crate::hash::HexDigest;

/// Metadata for a single `.deb` archive found during a repository scan.
///
/// Records are transient: one is built per archive per pass, rendered into
/// its textual stanza, and dropped. Only the rendered projection is
/// persisted. A control field the archive does not supply is stored as an
/// empty string and renders as an empty value rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Package name (`Package` control field).
    pub package: String,
    /// Package version string.
    pub version: String,
    /// Target architecture (e.g. `amd64`, `all`).
    pub architecture: String,
    /// Maintainer name and email.
    pub maintainer: String,
    /// Archive file name relative to the repository root.
    pub filename: String,
    /// Byte length of the archive on disk.
    pub size: u64,
    /// MD5 digest of the archive bytes.
    pub md5: HexDigest,
    /// SHA-1 digest of the archive bytes.
    pub sha1: HexDigest,
    /// SHA-256 digest of the archive bytes.
    pub sha256: HexDigest,
    /// Package description. May span multiple lines; continuation lines
    /// keep their leading space so the rendered stanza stays well-formed.
    pub description: String,
}

impl PackageRecord {
    /// Case-normalizing field accessor.
    ///
    /// `get("Architecture")`, `get("architecture")` and
    /// `get("ARCHITECTURE")` all return the same value. Accepts both the
    /// schema keys and the canonical stanza spellings (`MD5sum` for
    /// `md5`). Returns `None` for names outside the schema.
    pub fn get(&self, field: &str) -> Option<Cow<'_, str>> {
        let value = match field.to_ascii_lowercase().as_str() {
            "package" => Cow::from(&self.package),
            "version" => Cow::from(&self.version),
            "architecture" => Cow::from(&self.architecture),
            "maintainer" => Cow::from(&self.maintainer),
            "filename" => Cow::from(&self.filename),
            "size" => Cow::from(self.size.to_string()),
            "md5" | "md5sum" => Cow::from(self.md5.as_str()),
            "sha1" => Cow::from(self.sha1.as_str()),
            "sha256" => Cow::from(self.sha256.as_str()),
            "description" => Cow::from(&self.description),
            _ => return None,
        };
        Some(value)
    }

    /// Render this record as one index stanza.
    ///
    /// Ten `Key: Value` lines in [`FIELD_SCHEMA`] order, terminated by
    /// exactly one blank line. Identical records render identically.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (canonical, key) in FIELD_SCHEMA {
            let value = self.get(key).unwrap_or(Cow::Borrowed(""));
            writeln!(f, "{canonical}: {value}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PackageRecord {
        PackageRecord {
            package: "jq".to_string(),
            version: "1.7.1-3".to_string(),
            architecture: "amd64".to_string(),
            maintainer: "Jane Doe <jane@example.org>".to_string(),
            filename: "jq_1.7.1-3_amd64.deb".to_string(),
            size: 123_456,
            md5: HexDigest::new("d".repeat(32)),
            sha1: HexDigest::new("e".repeat(40)),
            sha256: HexDigest::new("f".repeat(64)),
            description: "lightweight JSON processor".to_string(),
        }
    }

    #[test]
    fn get_is_case_insensitive() {
        let record = sample();
        for name in ["Architecture", "architecture", "ARCHITECTURE"] {
            assert_eq!(record.get(name).unwrap(), "amd64");
        }
    }

    #[test]
    fn get_accepts_canonical_spellings() {
        let record = sample();
        assert_eq!(record.get("MD5sum"), record.get("md5"));
        assert_eq!(record.get("Size").unwrap(), "123456");
    }

    #[test]
    fn get_rejects_unknown_fields() {
        assert!(sample().get("depends").is_none());
    }

    #[test]
    fn render_emits_fields_in_schema_order() {
        let stanza = sample().render();
        let lines: Vec<_> = stanza.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Package: jq");
        assert_eq!(lines[1], "Version: 1.7.1-3");
        assert_eq!(lines[5], "Size: 123456");
        assert_eq!(lines[9], "Description: lightweight JSON processor");
        assert_eq!(lines[10], "");
        assert!(stanza.ends_with("\n\n"));
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(sample().render(), sample().render());
    }

    #[test]
    fn multiline_description_keeps_continuation_indent() {
        let mut record = sample();
        record.description = "summary\n extended line one\n extended line two".to_string();
        let stanza = record.render();
        assert!(stanza.contains("Description: summary\n extended line one\n extended line two\n"));
    }

    #[test]
    fn missing_field_renders_empty_value() {
        let mut record = sample();
        record.maintainer = String::new();
        assert!(record.render().contains("Maintainer: \n"));
    }
}
