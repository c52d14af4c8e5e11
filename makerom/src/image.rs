//! # Owned images
//! A [`RomImage`] is what [`RomImageBuilder::build`](crate::RomImageBuilder::build)
//! hands back: the full byte sequence, plus where the payload ends so callers
//! can inspect both halves.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{RomImageError, RomImageResult};

/// A fully laid out ROM image, ready to be persisted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RomImage {
    pub(crate) data: Vec<u8>,
    pub(crate) payload_len: usize,
}
impl RomImage {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Leading bytes copied from the payload.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.payload_len]
    }

    /// Trailing filler bytes, all equal to the padding byte.
    pub fn padding(&self) -> &[u8] {
        &self.data[self.payload_len..]
    }

    /// Writes the image verbatim to `path`, creating the file or truncating it
    /// if it already exists.
    ///
    /// The file handle is released when this returns, whether the write went
    /// through or not.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> RomImageResult<()> {
        let path = path.as_ref();
        let io_error = |source| RomImageError::Io {
            path: PathBuf::from(path),
            source,
        };

        let mut file = File::create(path).map_err(io_error)?;
        file.write_all(&self.data).map_err(io_error)?;
        file.flush().map_err(io_error)?;

        log::info!("wrote {} bytes to {}", self.data.len(), path.display());
        Ok(())
    }
}
impl AsRef<[u8]> for RomImage {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
