/// ImageReader — signature sniffing and decoding.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use crate::error::{Error, Result};
use super::format::ImageFormat;
use super::image_data::ImageData;

/// Bytes read up front to identify the format.
pub const SIGNATURE_LEN: usize = 12;

/// Decodes JPEG and PNG files into [`ImageData`].
pub struct ImageReader;

impl ImageReader {
    /// Read and decode an image file.
    ///
    /// JPEG decodes to RGB, PNG to RGBA, both 8 bits per channel.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if `path` does not exist
    /// - `InvalidPath` if it is not a regular file
    /// - `DecodeFailed` if the file is shorter than a signature or corrupt
    /// - `UnsupportedFormat` if the signature is not JPEG or PNG
    pub fn read_image(path: &Path) -> Result<ImageData> {
        let bytes = match read_file(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                crate::lgl_error!("lgl::ImageReader", "{}", err);
                return Err(err);
            }
        };

        let image = Self::decode(&bytes).inspect_err(|err| {
            crate::lgl_error!("lgl::ImageReader", "{}: {}", path.display(), err);
        })?;

        crate::lgl_info!(
            "lgl::ImageReader",
            "Loaded {} ({}x{}, {} channels)",
            path.display(), image.width(), image.height(), image.channels()
        );
        Ok(image)
    }

    /// Decode an in-memory image.
    pub fn decode(bytes: &[u8]) -> Result<ImageData> {
        if bytes.len() < SIGNATURE_LEN {
            return Err(Error::DecodeFailed(format!(
                "file too short for a signature ({} bytes)", bytes.len()
            )));
        }

        match ImageFormat::detect(&bytes[..SIGNATURE_LEN]) {
            ImageFormat::Jpeg => {
                let decoded = ::image::load_from_memory_with_format(bytes, ::image::ImageFormat::Jpeg)?;
                let rgb = decoded.to_rgb8();
                let (width, height) = rgb.dimensions();
                ImageData::new(rgb.into_raw(), width, height, 3)
            }
            ImageFormat::Png => {
                let decoded = ::image::load_from_memory_with_format(bytes, ::image::ImageFormat::Png)?;
                let rgba = decoded.to_rgba8();
                let (width, height) = rgba.dimensions();
                ImageData::new(rgba.into_raw(), width, height, 4)
            }
            ImageFormat::Unknown => Err(Error::UnsupportedFormat(
                "signature is neither JPEG nor PNG".to_string(),
            )),
        }
    }

    /// `read_image`, optionally flipped bottom-up for OpenGL.
    pub fn load_texture(path: &Path, flip_vertical: bool) -> Result<ImageData> {
        let image = Self::read_image(path)?;
        Ok(if flip_vertical { image.flipped_vertical() } else { image })
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(Error::InvalidPath(path.display().to_string()));
    }
    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Frame header values of a JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegInfo {
    pub width: u16,
    pub height: u16,
    /// Color components (1 = grayscale, 3 = YCbCr)
    pub components: u8,
}

/// Read dimensions from the first SOF0/SOF1/SOF2 segment without decoding.
///
/// Walks the marker segments after SOI.
pub fn probe_jpeg_dimensions(bytes: &[u8]) -> Result<JpegInfo> {
    if ImageFormat::detect(bytes) != ImageFormat::Jpeg {
        return Err(Error::UnsupportedFormat("not a JPEG stream".to_string()));
    }

    let mut i = 2;
    while i + 4 <= bytes.len() {
        if bytes[i] != 0xFF {
            return Err(Error::DecodeFailed(format!("expected marker at offset {}", i)));
        }
        let marker = bytes[i + 1];
        match marker {
            // Fill byte
            0xFF => i += 1,
            // Standalone markers carry no length
            0x01 | 0xD0..=0xD7 => i += 2,
            // EOI or SOS before any frame header
            0xD9 | 0xDA => break,
            _ => {
                let length = u16::from_be_bytes([bytes[i + 2], bytes[i + 3]]) as usize;
                if matches!(marker, 0xC0..=0xC2) {
                    // length(2) precision(1) height(2) width(2) components(1)
                    let header = bytes
                        .get(i + 4..i + 10)
                        .ok_or_else(|| Error::DecodeFailed("truncated frame header".to_string()))?;
                    let info = JpegInfo {
                        height: u16::from_be_bytes([header[1], header[2]]),
                        width: u16::from_be_bytes([header[3], header[4]]),
                        components: header[5],
                    };
                    if info.width == 0 || info.height == 0 || info.components == 0 {
                        return Err(Error::DecodeFailed("frame header has zero dimensions".to_string()));
                    }
                    return Ok(info);
                }
                i += 2 + length;
            }
        }
    }

    Err(Error::DecodeFailed("no SOF0/SOF1/SOF2 frame header".to_string()))
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
