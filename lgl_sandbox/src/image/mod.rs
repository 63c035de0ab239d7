//! Image module — texture loading for GPU upload.
//!
//! [`ImageReader`] sniffs the file signature, decodes with the `image`
//! crate and returns tightly packed 8-bit pixels in an [`ImageData`]:
//! RGB for JPEG, RGBA for PNG. Rows run top to bottom; call
//! [`ImageData::flip_vertical`] (or `load_texture(path, true)`) for
//! OpenGL's bottom-up convention.

mod format;
mod image_data;
mod reader;

pub use format::{ImageFormat, PixelFormat};
pub use image_data::{ImageData, TextureData};
pub use reader::{probe_jpeg_dimensions, ImageReader, JpegInfo, SIGNATURE_LEN};
