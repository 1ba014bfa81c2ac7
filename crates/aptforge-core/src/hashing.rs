//! Multi-algorithm checksum computation.
//!
//! The index and release formats carry MD5, SHA-1 and SHA-256 digests for
//! every hashed byte stream, so all three are computed in a single pass.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use aptforge_schema::{ChecksumSet, HexDigest};

const READ_BUF_LEN: usize = 64 * 1024;

/// Compute all three digests over everything `reader` yields.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn checksum_reader<R: Read>(mut reader: R) -> io::Result<ChecksumSet> {
    let mut md5 = Md5::new();
    let mut sha1 = Sha1::new();
    let mut sha256 = Sha256::new();

    let mut buf = [0u8; READ_BUF_LEN];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        md5.update(&buf[..n]);
        sha1.update(&buf[..n]);
        sha256.update(&buf[..n]);
    }

    Ok(ChecksumSet {
        md5: HexDigest::new(hex::encode(md5.finalize())),
        sha1: HexDigest::new(hex::encode(sha1.finalize())),
        sha256: HexDigest::new(hex::encode(sha256.finalize())),
    })
}

/// Compute all three digests over an in-memory byte slice.
pub fn checksum_bytes(data: &[u8]) -> ChecksumSet {
    ChecksumSet {
        md5: HexDigest::new(hex::encode(Md5::digest(data))),
        sha1: HexDigest::new(hex::encode(Sha1::digest(data))),
        sha256: HexDigest::new(hex::encode(Sha256::digest(data))),
    }
}

/// Compute all three digests over a file's full contents, streaming.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn checksum_file(path: &Path) -> io::Result<ChecksumSet> {
    checksum_reader(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known digests of the empty byte stream.
    const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";
    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn empty_stream_digests() {
        let sums = checksum_bytes(b"");
        assert_eq!(sums.md5.as_str(), EMPTY_MD5);
        assert_eq!(sums.sha1.as_str(), EMPTY_SHA1);
        assert_eq!(sums.sha256.as_str(), EMPTY_SHA256);
    }

    #[test]
    fn known_vector() {
        let sums = checksum_bytes(b"hello world");
        assert_eq!(sums.md5.as_str(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
        assert_eq!(sums.sha1.as_str(), "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
        assert_eq!(
            sums.sha256.as_str(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn reader_and_bytes_agree() {
        let data = vec![0xa5u8; 200_000]; // spans multiple read buffers
        let from_reader = checksum_reader(data.as_slice()).unwrap();
        assert_eq!(from_reader, checksum_bytes(&data));
    }
}
