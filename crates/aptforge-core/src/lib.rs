//! Repository indexing and release generation engine for aptforge.
//!
//! Given a flat directory of `.deb` archives, the engine produces the
//! three artifacts an apt client needs to discover and verify packages:
//!
//! - `Packages` -- one stanza per archive, in directory scan order,
//! - `Packages.gz` -- the identical byte stream, gzip-compressed,
//! - `Release` -- architectures, timestamp, and checksums/sizes of the
//!   two index artifacts.
//!
//! Entry point is [`Repo`]: construct it over a repository root, then call
//! [`Repo::write_package_meta`] followed by [`Repo::write_release_meta`].
//! Everything is synchronous, blocking std I/O; one builder per root at a
//! time (serializing builds across processes is the caller's obligation).

pub mod builder;
pub mod control;
pub mod deb;
pub mod error;
pub mod extract;
pub mod hashing;

pub use builder::{PACKAGES_FILE, PACKAGES_GZ_FILE, RELEASE_FILE, Repo};
pub use error::{BuildError, ExtractError};
pub use extract::extract;
