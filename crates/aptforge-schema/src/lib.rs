//! Shared types and wire format for aptforge.
//!
//! This crate defines the textual formats a flat apt repository exposes to
//! clients, with no I/O of its own:
//!
//! - the fixed per-package field schema of the `Packages` index
//!   ([`FIELD_SCHEMA`]),
//! - [`PackageRecord`], one extracted package and its rendered stanza,
//! - digest newtypes and the checksum triple ([`HexDigest`],
//!   [`ChecksumSet`]),
//! - [`Release`], the manifest summarizing the index artifacts.
//!
//! The engine in `aptforge-core` produces these values; rendering them is
//! deterministic so regeneration over unchanged inputs is reproducible.

pub mod fields;
pub mod hash;
pub mod record;
pub mod release;

pub use fields::FIELD_SCHEMA;
pub use hash::{ChecksumAlgo, ChecksumSet, HexDigest};
pub use record::PackageRecord;
pub use release::{ArtifactDigests, Release};
