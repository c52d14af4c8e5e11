//! # MakeRom
//! Builds fixed-size ROM images: a short payload sits at the start of the
//! image, and every remaining byte is set to a single padding value.
//!
//! The core of the crate does not need [`std`]: [`RomImageBuilder::fill`] works
//! on any mutable byte slice and [`RomImageBuilder::build_array`] returns a
//! plain array, so images can be laid out on baremetal targets too. With the
//! (default) `std` feature, [`RomImageBuilder::build`] returns an owned
//! [`RomImage`] which can be written to disk.
//!
//! ```
//! use makerom::{RomImageBuilder, DEFAULT_ROM_SIZE};
//!
//! let rom = RomImageBuilder::default().build(DEFAULT_ROM_SIZE).unwrap();
//! assert_eq!(rom.len(), 0x0e00);
//! assert_eq!(&rom.as_bytes()[..2], &[0x40, 0x45]);
//! assert!(rom.padding().iter().all(|&b| b == 0xea));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod error;
#[cfg(feature = "std")]
mod image;

pub use error::{RomImageError, RomImageResult};
#[cfg(feature = "std")]
pub use image::RomImage;


/// Bytes placed at the very start of the reference image.
pub const DEFAULT_PAYLOAD: [u8; 2] = [0x40, 0x45];
/// Filler used for everything after the payload.
pub const DEFAULT_PADDING: u8 = 0xea;
/// Total size of the reference image.
pub const DEFAULT_ROM_SIZE: usize = 0x0e00;
/// Where the reference image gets written, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "test.bin";

/// Lays out a payload followed by padding up to an exact image size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RomImageBuilder<'payload> {
    payload: &'payload [u8],
    padding: u8,
}
impl Default for RomImageBuilder<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_PAYLOAD)
    }
}
impl<'payload> RomImageBuilder<'payload> {
    /// Returns a builder placing `payload` at the start of the image, padded
    /// with [`DEFAULT_PADDING`].
    pub fn new(payload: &'payload [u8]) -> Self {
        Self {
            payload,
            padding: DEFAULT_PADDING,
        }
    }

    /// Replaces the padding byte.
    pub fn with_padding(mut self, padding: u8) -> Self {
        self.padding = padding;
        self
    }

    pub fn payload(&self) -> &'payload [u8] {
        self.payload
    }

    pub fn padding(&self) -> u8 {
        self.padding
    }

    /// Number of padding bytes needed to reach `size`.
    ///
    /// Fails if the payload alone is longer than `size`.
    pub fn padding_len(&self, size: usize) -> RomImageResult<usize> {
        size.checked_sub(self.payload.len())
            .ok_or(RomImageError::PayloadTooLarge {
                payload: self.payload.len(),
                size,
            })
    }

    /// Writes the image into `rom`, whose length is the image size.
    ///
    /// If the payload does not fit, `rom` is left as is.
    pub fn fill(&self, rom: &mut [u8]) -> RomImageResult<()> {
        let padding_len = self.padding_len(rom.len())?;
        let (payload, padding) = rom.split_at_mut(self.payload.len());
        payload.copy_from_slice(self.payload);
        padding.fill(self.padding);

        log::trace!(
            "filled {} bytes: {} payload, {} x {:#04x}",
            rom.len(),
            self.payload.len(),
            padding_len,
            self.padding
        );
        Ok(())
    }

    /// Lays out an image whose size is known at compile time.
    pub fn build_array<const SIZE: usize>(&self) -> RomImageResult<[u8; SIZE]> {
        let mut rom = [self.padding; SIZE];
        self.fill(&mut rom)?;
        Ok(rom)
    }

    /// Lays out an owned image of exactly `size` bytes.
    #[cfg(feature = "std")]
    pub fn build(&self, size: usize) -> RomImageResult<RomImage> {
        let padding_len = self.padding_len(size)?;

        let mut data = Vec::with_capacity(size);
        data.extend_from_slice(self.payload);
        data.resize(size, self.padding);

        log::debug!(
            "laid out {size:#06x} byte image ({} payload bytes, {padding_len} padding bytes)",
            self.payload.len()
        );
        Ok(RomImage {
            data,
            payload_len: self.payload.len(),
        })
    }
}
