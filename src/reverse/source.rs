//! Read-only byte-range access to the underlying file.

use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use log::info;

use super::error::{Result, ReverseReadError};

/// Owns the read-only file handle and answers absolute-offset range reads.
///
/// The handle is closed when the owner drops this value; there is no
/// explicit close operation.
#[derive(Debug)]
pub struct ByteSource {
    file: File,
    path: PathBuf,
    size: u64,
}

impl ByteSource {
    /// Open `path` read-only and record its size.
    ///
    /// # Errors
    /// [`ReverseReadError::NotFound`] if the path does not exist,
    /// [`ReverseReadError::Io`] for any other access fault.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening file for reverse reading: {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReverseReadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ReverseReadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let size = file
            .metadata()
            .map_err(|e| ReverseReadError::Io {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();

        Ok(Self {
            file,
            path: path.to_path_buf(),
            size,
        })
    }

    /// Total file size in bytes, fixed at open time.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Read the `length` bytes immediately preceding `end_offset`.
    ///
    /// `length` is clamped to the bytes available before `end_offset`.
    pub fn read_back(&mut self, end_offset: u64, length: usize) -> Result<Vec<u8>> {
        let start = end_offset.saturating_sub(length as u64);
        self.file
            .seek(SeekFrom::Start(start))
            .map_err(|e| self.io_error(e))?;

        let mut buf = vec![0u8; (end_offset - start) as usize];
        self.file
            .read_exact(&mut buf)
            .map_err(|e| self.io_error(e))?;
        Ok(buf)
    }

    fn io_error(&self, source: std::io::Error) -> ReverseReadError {
        ReverseReadError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
