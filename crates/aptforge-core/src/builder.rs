//! The repository builder: scanning, index generation, release generation.
//!
//! One build cycle per repository root runs `EMPTY -> INDEXED ->
//! RELEASED`: [`Repo::write_package_meta`] produces `Packages` and
//! `Packages.gz`, then [`Repo::write_release_meta`] summarizes them into
//! `Release`. Calling the release pass before the index pass fails fast
//! with [`BuildError::MissingArtifact`].
//!
//! The artifacts are mutated in place without locking. Callers must
//! serialize builds per root; no concurrent builder may target the same
//! directory.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::{debug, info};

use aptforge_schema::{ArtifactDigests, Release};

use crate::control::ControlFile;
use crate::error::{BuildError, ExtractError};
use crate::{deb, extract, hashing};

/// File name of the plain package index artifact.
pub const PACKAGES_FILE: &str = "Packages";
/// File name of the gzip-compressed package index artifact.
pub const PACKAGES_GZ_FILE: &str = "Packages.gz";
/// File name of the release manifest artifact.
pub const RELEASE_FILE: &str = "Release";

/// Archive files are selected by this exact name suffix, case-sensitive.
const ARCHIVE_SUFFIX: &str = ".deb";

/// Timestamp format of the `Date:` line, e.g.
/// `Wed, 05 Jun 2024 14:03:21 +0000`.
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// A builder over one flat repository root.
///
/// The root is fixed at construction and owned exclusively for the
/// duration of a build. Repeated builds over unchanged archives are
/// idempotent apart from the `Date:` line of `Release`.
#[derive(Debug, Clone)]
pub struct Repo {
    root: PathBuf,
}

impl Repo {
    /// Create a builder for the given repository root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The repository root this builder operates on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the archive file names in the root, in directory order.
    ///
    /// Immediate entries only (non-recursive), filtered to names ending
    /// in `.deb`. The listing order is whatever the platform returns --
    /// it is not sorted, and it becomes the index's stanza order. Zero
    /// matches is a valid empty scan, not an error.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the root cannot be listed.
    // The suffix match is case-sensitive: `X.DEB` is not an archive.
    #[allow(clippy::case_sensitive_file_extension_comparisons)]
    pub fn scan_packages(&self) -> Result<Vec<String>, BuildError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.ends_with(ARCHIVE_SUFFIX) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Generate `Packages` and `Packages.gz` from a full scan of the root.
    ///
    /// Both artifacts are created (truncating any previous run) at the
    /// start of the pass and held open across it, so a run yields one
    /// coherent file pair and re-running never duplicates stanzas. Each
    /// archive is extracted and its stanza appended to the plain index
    /// and, through a streaming gzip encoder, to the compressed index;
    /// decompressing `Packages.gz` yields `Packages` byte for byte.
    ///
    /// # Errors
    ///
    /// Fails on the first archive whose extraction fails, or on any
    /// filesystem error. Stanzas written before the failure stay on disk;
    /// there is no rollback.
    pub fn write_package_meta(&self) -> Result<(), BuildError> {
        let names = self.scan_packages()?;

        let mut plain = BufWriter::new(File::create(self.root.join(PACKAGES_FILE))?);
        let mut gz = GzEncoder::new(
            BufWriter::new(File::create(self.root.join(PACKAGES_GZ_FILE))?),
            Compression::default(),
        );

        for name in &names {
            let record = extract::extract(&self.root, name).map_err(|source| {
                BuildError::Extract {
                    path: self.root.join(name),
                    source,
                }
            })?;
            let stanza = record.render();
            plain.write_all(stanza.as_bytes())?;
            gz.write_all(stanza.as_bytes())?;
            debug!(package = %record.package, file = %name, "indexed archive");
        }

        plain.flush()?;
        gz.finish()?.flush()?;

        info!(packages = names.len(), root = %self.root.display(), "wrote package index");
        Ok(())
    }

    /// Generate the `Release` manifest over the index artifacts.
    ///
    /// Re-scans the root to collect the distinct architectures (first
    /// seen order, deduplicated), reads back the final on-disk bytes of
    /// `Packages` and `Packages.gz`, and writes a fresh manifest
    /// (truncate + write, so a re-run leaves a single authoritative
    /// `Release`).
    ///
    /// # Errors
    ///
    /// Fails with [`BuildError::MissingArtifact`] if either index
    /// artifact does not exist -- this pass is only valid after
    /// [`Repo::write_package_meta`] has completed successfully. Also
    /// fails if any archive's control data cannot be re-read, or on any
    /// filesystem error.
    pub fn write_release_meta(&self) -> Result<(), BuildError> {
        let packages = self.root.join(PACKAGES_FILE);
        let packages_gz = self.root.join(PACKAGES_GZ_FILE);
        for artifact in [&packages, &packages_gz] {
            if !artifact.is_file() {
                return Err(BuildError::MissingArtifact(artifact.clone()));
            }
        }

        let architectures = self.collect_architectures()?;

        let release = Release {
            architectures,
            date: Utc::now().format(DATE_FORMAT).to_string(),
            index: artifact_digests(&packages)?,
            compressed: artifact_digests(&packages_gz)?,
        };

        fs::write(self.root.join(RELEASE_FILE), release.render())?;
        info!(root = %self.root.display(), "wrote release manifest");
        Ok(())
    }

    /// Distinct `Architecture` values across the scanned archives, in
    /// first-seen order. Absent or empty values are skipped so the
    /// space-joined `Architectures:` line stays well-formed.
    ///
    /// Only the control paragraph is re-read here; the archives are not
    /// re-hashed. The observable result matches a full re-extraction.
    fn collect_architectures(&self) -> Result<Vec<String>, BuildError> {
        let mut architectures: Vec<String> = Vec::new();
        for name in self.scan_packages()? {
            let path = self.root.join(&name);
            let arch = read_architecture(&path).map_err(|source| BuildError::Extract {
                path,
                source,
            })?;
            if let Some(arch) = arch.filter(|a| !a.is_empty()) {
                if !architectures.contains(&arch) {
                    architectures.push(arch);
                }
            }
        }
        Ok(architectures)
    }
}

fn read_architecture(path: &Path) -> Result<Option<String>, ExtractError> {
    let control_text = deb::read_control(path)?;
    let control = ControlFile::parse(&control_text)?;
    Ok(control.get("Architecture").map(ToString::to_string))
}

fn artifact_digests(path: &Path) -> Result<ArtifactDigests, BuildError> {
    Ok(ArtifactDigests {
        checksums: hashing::checksum_file(path)?,
        size: fs::metadata(path)?.len(),
    })
}
