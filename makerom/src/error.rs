#[cfg(feature = "std")]
use std::path::PathBuf;

use thiserror::Error;

pub type RomImageResult<T> = Result<T, RomImageError>;

/// Everything that can go wrong while laying out or persisting a ROM image.
#[derive(Debug, Error)]
pub enum RomImageError {
    /// The payload alone is longer than the requested image.
    #[error("payload of {payload} bytes does not fit in a {size} byte image")]
    PayloadTooLarge { payload: usize, size: usize },

    #[cfg(feature = "std")]
    #[error("failed to write ROM image to {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
