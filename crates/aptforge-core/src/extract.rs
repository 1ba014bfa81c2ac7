//! Per-archive metadata extraction.

use std::fs;
use std::path::Path;

use aptforge_schema::PackageRecord;

use crate::control::ControlFile;
use crate::error::ExtractError;
use crate::{deb, hashing};

/// Extract a fully-populated [`PackageRecord`] from one `.deb` archive.
///
/// `file_name` is the archive's name within `root`; it becomes the
/// record's `Filename` field (the repository layout is flat). The archive
/// bytes are hashed in a single streaming pass; `Size` comes from file
/// metadata. Control fields the archive does not declare (maintainer,
/// description, ...) map to empty strings -- the record is still complete
/// and renders an empty value for them.
///
/// Pure read: no side effects on the repository.
///
/// # Errors
///
/// Returns an [`ExtractError`] if the archive is unreadable, is not a
/// valid `.deb`, or its control data cannot be parsed. Checksum
/// computation itself never fails for a readable file.
pub fn extract(root: &Path, file_name: &str) -> Result<PackageRecord, ExtractError> {
    let path = root.join(file_name);

    let control_text = deb::read_control(&path)?;
    let control = ControlFile::parse(&control_text)?;
    let size = fs::metadata(&path)?.len();
    let sums = hashing::checksum_file(&path)?;

    let field = |name: &str| control.get(name).unwrap_or_default().to_string();

    Ok(PackageRecord {
        package: field("Package"),
        version: field("Version"),
        architecture: field("Architecture"),
        maintainer: field("Maintainer"),
        filename: file_name.to_string(),
        size,
        md5: sums.md5,
        sha1: sums.sha1,
        sha256: sums.sha256,
        description: field("Description"),
    })
}
