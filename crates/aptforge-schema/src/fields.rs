//! The fixed field schema of a `Packages` stanza.

/// Ordered `(canonical, key)` pairs for every field of a package stanza.
///
/// The single source of truth for the index wire format: rendering walks
/// this list in order, and the lower-case `key` half is what
/// [`PackageRecord::get`](crate::record::PackageRecord::get) matches
/// against. Keeping both call sites on one list means the stanza layout
/// and the lookup vocabulary cannot drift apart.
pub const FIELD_SCHEMA: &[(&str, &str)] = &[
    ("Package", "package"),
    ("Version", "version"),
    ("Architecture", "architecture"),
    ("Maintainer", "maintainer"),
    ("Filename", "filename"),
    ("Size", "size"),
    ("MD5sum", "md5"),
    ("SHA1", "sha1"),
    ("SHA256", "sha256"),
    ("Description", "description"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_ten_fields() {
        assert_eq!(FIELD_SCHEMA.len(), 10);
    }

    #[test]
    fn schema_starts_with_package_and_ends_with_description() {
        assert_eq!(FIELD_SCHEMA[0], ("Package", "package"));
        assert_eq!(FIELD_SCHEMA[9], ("Description", "description"));
    }

    #[test]
    fn keys_are_lowercase() {
        for (_, key) in FIELD_SCHEMA {
            assert_eq!(*key, key.to_lowercase());
        }
    }
}
