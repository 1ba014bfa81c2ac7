//! The `Release` manifest summarizing the index artifacts.

use serde::{Deserialize, Serialize};

use crate::hash::{ChecksumAlgo, ChecksumSet};

/// Checksums and byte size of one generated artifact, as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDigests {
    /// Digests over the artifact's final on-disk bytes.
    pub checksums: ChecksumSet,
    /// Byte length of the artifact on disk.
    pub size: u64,
}

/// The release manifest for one repository build.
///
/// Summarizes the plain and gzip index artifacts so a client can verify
/// what it downloads. Rendering is deterministic for fixed field values;
/// only the `date` field varies between otherwise identical builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Distinct architectures observed across the scanned archives, in
    /// first-seen order.
    pub architectures: Vec<String>,
    /// Generation timestamp, preformatted as
    /// `Wed, 05 Jun 2024 14:03:21 +0000`.
    pub date: String,
    /// Digests and size of the plain `Packages` artifact.
    pub index: ArtifactDigests,
    /// Digests and size of the `Packages.gz` artifact.
    pub compressed: ArtifactDigests,
}

impl Release {
    /// Render the manifest text.
    ///
    /// Line order: `Architectures:`, `Date:`, then one block per
    /// algorithm (`MD5Sum`, `SHA1`, `SHA256`), each block a header line
    /// followed by two indented `<digest> <size>` entries, plain artifact
    /// first.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Architectures: {}", self.architectures.join(" "))?;
        writeln!(f, "Date: {}", self.date)?;
        for algo in ChecksumAlgo::ALL {
            writeln!(f, "{}:", algo.release_header())?;
            for artifact in [&self.index, &self.compressed] {
                writeln!(f, " {} {}", artifact.checksums.get(algo), artifact.size)?;
            }
        }
        Ok(())
    }
}
