/// Image container and pixel layout identification.

const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// File format, detected from leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Unknown,
}

impl ImageFormat {
    /// Identify a format by its signature. Extension-independent.
    pub fn detect(header: &[u8]) -> Self {
        if header.starts_with(&JPEG_SIGNATURE) {
            ImageFormat::Jpeg
        } else if header.starts_with(&PNG_SIGNATURE) {
            ImageFormat::Png
        } else {
            ImageFormat::Unknown
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Unknown => "unknown",
        }
    }
}

/// Channel layout of 8-bit pixels (maps to GL_RED / GL_RG / GL_RGB / GL_RGBA).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Red,
    Rg,
    Rgb,
    Rgba,
}

impl PixelFormat {
    /// `None` outside 1..=4.
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            1 => Some(PixelFormat::Red),
            2 => Some(PixelFormat::Rg),
            3 => Some(PixelFormat::Rgb),
            4 => Some(PixelFormat::Rgba),
            _ => None,
        }
    }

    pub fn channels(self) -> u8 {
        match self {
            PixelFormat::Red => 1,
            PixelFormat::Rg => 2,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
