use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha1::Sha1;
use sha2::{Digest, Sha256};
use tokio_util::sync::CancellationToken;

use crate::constants::DEFAULT_BUFFER_SIZE;
use crate::error::CollectError;
use crate::models::FileChecksum;

/// Calculate size, SHA-1 and SHA-256 of a file in one sequential read.
///
/// Fails with `CollectError::FileRead` if the file is missing, unreadable,
/// or is no longer a regular file. Checks `cancel` between chunks.
pub fn checksum_file(path: &Path, cancel: &CancellationToken) -> Result<FileChecksum, CollectError> {
    let file = File::open(path).map_err(|e| CollectError::file_read(path, e))?;

    let metadata = file.metadata().map_err(|e| CollectError::file_read(path, e))?;
    if !metadata.is_file() {
        return Err(CollectError::file_read(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    checksum_reader(BufReader::new(file), cancel).map_err(|e| match e {
        ChecksumError::Io(source) => CollectError::file_read(path, source),
        ChecksumError::Cancelled => CollectError::Cancelled,
    })
}

/// Failure while streaming a reader through the digests
#[derive(Debug)]
pub enum ChecksumError {
    Io(std::io::Error),
    Cancelled,
}

/// Stream a reader through both digests, counting bytes as they pass
pub fn checksum_reader<R: Read>(
    mut reader: R,
    cancel: &CancellationToken,
) -> Result<FileChecksum, ChecksumError> {
    let mut sha1 = Sha1::new();
    let mut sha256 = Sha256::new();
    let mut size: u64 = 0;
    let mut buffer = vec![0; DEFAULT_BUFFER_SIZE];

    loop {
        if cancel.is_cancelled() {
            return Err(ChecksumError::Cancelled);
        }

        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ChecksumError::Io(e)),
        };

        sha1.update(&buffer[..bytes_read]);
        sha256.update(&buffer[..bytes_read]);
        size += bytes_read as u64;
    }

    Ok(FileChecksum {
        size,
        sha1: format!("{:x}", sha1.finalize()),
        sha256: format!("{:x}", sha256.finalize()),
    })
}
