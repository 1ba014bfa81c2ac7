//! Reading the control paragraph out of a `.deb` archive.
//!
//! A `.deb` is a common-format `ar` archive: an 8-byte global magic
//! followed by members, each a 60-byte header (name, metadata, decimal
//! size, closing magic) and data padded to an even offset. The control
//! paragraph lives in a `control.tar`, `control.tar.gz` or
//! `control.tar.zst` member as an entry named `control`.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::ExtractError;

const AR_MAGIC: &[u8; 8] = b"!<arch>\n";
const AR_HEADER_LEN: usize = 60;
const AR_HEADER_MAGIC: &[u8; 2] = b"`\n";

/// Read and return the raw control paragraph text from a `.deb` archive.
///
/// # Errors
///
/// Returns an [`ExtractError`] if the file is not an `ar` archive, has no
/// `control.tar*` member, uses an unsupported control compression, lacks
/// a `control` entry, or fails to read.
pub fn read_control(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    read_control_from(BufReader::new(file))
}

/// Seekable-reader variant of [`read_control`].
///
/// # Errors
///
/// Same failure modes as [`read_control`].
pub fn read_control_from<R: Read + Seek>(mut reader: R) -> Result<String, ExtractError> {
    let mut magic = [0u8; 8];
    reader
        .read_exact(&mut magic)
        .map_err(|_| ExtractError::NotAnArchive)?;
    if &magic != AR_MAGIC {
        return Err(ExtractError::NotAnArchive);
    }

    let mut header = [0u8; AR_HEADER_LEN];
    loop {
        match reader.read_exact(&mut header) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(ExtractError::MissingMember("control.tar"));
            }
            Err(e) => return Err(e.into()),
        }
        if &header[58..60] != AR_HEADER_MAGIC {
            return Err(ExtractError::NotAnArchive);
        }

        let name = member_name(&header)?;
        let size = member_size(&header)?;

        if let Some(ext) = name.strip_prefix("control.tar") {
            let ext = ext.to_string();
            let mut data = Vec::new();
            reader.by_ref().take(size).read_to_end(&mut data)?;
            if (data.len() as u64) < size {
                return Err(ExtractError::NotAnArchive);
            }
            return control_text(&ext, &data);
        }

        // Member data is padded to an even offset.
        reader.seek(SeekFrom::Current((size + (size & 1)) as i64))?;
    }
}

fn member_name(header: &[u8; AR_HEADER_LEN]) -> Result<&str, ExtractError> {
    let name = std::str::from_utf8(&header[0..16]).map_err(|_| ExtractError::NotAnArchive)?;
    // GNU ar appends a '/' to member names; dpkg historically does not.
    Ok(name.trim_end_matches(' ').trim_end_matches('/'))
}

fn member_size(header: &[u8; AR_HEADER_LEN]) -> Result<u64, ExtractError> {
    std::str::from_utf8(&header[48..58])
        .map_err(|_| ExtractError::NotAnArchive)?
        .trim()
        .parse()
        .map_err(|_| ExtractError::NotAnArchive)
}

/// Decompress the control tarball and pull out the `control` entry.
fn control_text(ext: &str, data: &[u8]) -> Result<String, ExtractError> {
    let reader: Box<dyn Read + '_> = match ext {
        "" => Box::new(data),
        ".gz" => Box::new(GzDecoder::new(data)),
        ".zst" => Box::new(zstd::stream::read::Decoder::new(data)?),
        other => {
            return Err(ExtractError::UnsupportedCompression(
                other.trim_start_matches('.').to_string(),
            ));
        }
    };

    let mut archive = tar::Archive::new(reader);
    for entry in archive.entries()? {
        let mut entry = entry?;
        let path = entry.path()?.into_owned();
        let path = path.strip_prefix("./").unwrap_or(&path);
        if path == Path::new("control") {
            let mut text = String::new();
            entry.read_to_string(&mut text)?;
            return Ok(text);
        }
    }
    Err(ExtractError::MissingMember("control"))
}
