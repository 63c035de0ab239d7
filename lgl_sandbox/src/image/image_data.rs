/// Decoded pixel buffer.

use crate::error::{Error, Result};
use super::format::PixelFormat;

/// Tightly packed 8-bit pixels, rows top to bottom.
///
/// The buffer length always equals `width * height * channels`. Pixels can
/// only be changed by flipping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageData {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

/// Pixels ready for a texture upload.
pub type TextureData = ImageData;

impl ImageData {
    /// # Errors
    ///
    /// `InvalidImage` when a dimension is zero, `channels` is outside 1..=4,
    /// or `pixels.len()` does not match the dimensions.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32, channels: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidImage(format!("empty dimensions {}x{}", width, height)));
        }
        if PixelFormat::from_channels(channels).is_none() {
            return Err(Error::InvalidImage(format!("unsupported channel count {}", channels)));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels as usize))
            .ok_or_else(|| Error::InvalidImage(format!(
                "{}x{}x{} overflows the addressable size", width, height, channels
            )))?;
        if pixels.len() != expected {
            return Err(Error::InvalidImage(format!(
                "{}x{}x{} needs {} bytes, got {}",
                width, height, channels, expected, pixels.len()
            )));
        }
        Ok(Self { pixels, width, height, channels })
    }

    /// Non-empty with non-zero dimensions. Only `default()` is invalid.
    pub fn is_valid(&self) -> bool {
        !self.pixels.is_empty() && self.width > 0 && self.height > 0 && self.channels > 0
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixel_format(&self) -> Option<PixelFormat> {
        PixelFormat::from_channels(self.channels)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Row `y` (0 is the top row), or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = y as usize * stride;
        self.pixels.get(start..start + stride)
    }

    /// Reverse the row order in place.
    pub fn flip_vertical(&mut self) {
        let stride = self.stride();
        if stride == 0 {
            return;
        }
        let rows = self.height as usize;
        for top in 0..rows / 2 {
            let bottom = rows - 1 - top;
            let (head, tail) = self.pixels.split_at_mut(bottom * stride);
            head[top * stride..(top + 1) * stride].swap_with_slice(&mut tail[..stride]);
        }
    }

    pub fn flipped_vertical(mut self) -> Self {
        self.flip_vertical();
        self
    }
}

#[cfg(test)]
#[path = "image_data_tests.rs"]
mod tests;
