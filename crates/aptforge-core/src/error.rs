//! Error types for extraction and repository builds.

use std::path::PathBuf;

use thiserror::Error;

use crate::control::ControlError;

/// Errors raised while reading metadata out of a single `.deb` archive.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The file does not start with the `ar` archive magic or has a
    /// corrupt member header.
    #[error("not a valid ar archive")]
    NotAnArchive,

    /// A required archive or tar member was not found.
    #[error("archive member not found: {0}")]
    MissingMember(&'static str),

    /// The control tarball uses a compression this build cannot decode.
    #[error("unsupported control compression: .{0}")]
    UnsupportedCompression(String),

    /// The embedded control file is malformed.
    #[error("malformed control data: {0}")]
    Control(#[from] ControlError),

    /// An I/O error occurred while reading the archive.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the repository builder.
///
/// All errors surface to the immediate caller; there is no retry and no
/// partial-result fallback. A failed index pass leaves already-written
/// stanzas on disk, so callers must clean the artifacts before retrying.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Metadata extraction failed for one archive, aborting the pass.
    #[error("failed to extract metadata from {}: {source}", .path.display())]
    Extract {
        /// Path of the archive that failed.
        path: PathBuf,
        /// The underlying extraction failure.
        source: ExtractError,
    },

    /// The release pass was invoked before the index artifacts exist.
    #[error("index artifact missing (run the package pass first): {}", .0.display())]
    MissingArtifact(PathBuf),

    /// A filesystem read or write failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
