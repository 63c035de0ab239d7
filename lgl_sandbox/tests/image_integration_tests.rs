//! Integration tests for texture loading
//!
//! Writes real JPEG/PNG files to a temp dir and reads them back.
//!
//! Run with: cargo test --test image_integration_tests

use std::path::Path;
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use lgl_sandbox::lgl::image::{probe_jpeg_dimensions, ImageReader, PixelFormat};
use lgl_sandbox::lgl::Error;

fn write(path: &Path, image: DynamicImage, format: image::ImageFormat) {
    image.save_with_format(path, format).unwrap();
}

#[test]
fn test_integration_load_png_texture_for_upload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("awesomeface.png");
    // Top half opaque white, bottom half transparent
    let image = RgbaImage::from_fn(8, 4, |_, y| {
        if y < 2 { Rgba([255, 255, 255, 255]) } else { Rgba([0, 0, 0, 0]) }
    });
    write(&path, DynamicImage::ImageRgba8(image), image::ImageFormat::Png);

    let texture = ImageReader::load_texture(&path, true).unwrap();
    assert_eq!(texture.pixel_format(), Some(PixelFormat::Rgba));
    assert_eq!(texture.byte_len(), 8 * 4 * 4);
    // Flipped for OpenGL: first row is the former bottom row
    assert_eq!(&texture.row(0).unwrap()[..4], &[0, 0, 0, 0]);
    assert_eq!(&texture.row(3).unwrap()[..4], &[255, 255, 255, 255]);
}

#[test]
fn test_integration_load_jpeg_texture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("container.jpg");
    write(
        &path,
        DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 32, Rgb([200, 120, 40]))),
        image::ImageFormat::Jpeg,
    );

    let bytes = std::fs::read(&path).unwrap();
    let info = probe_jpeg_dimensions(&bytes).unwrap();
    assert_eq!((info.width, info.height, info.components), (64, 32, 3));

    let texture = ImageReader::read_image(&path).unwrap();
    assert_eq!((texture.width(), texture.height()), (64, 32));
    assert_eq!(texture.pixel_format(), Some(PixelFormat::Rgb));
    assert_eq!(texture.pixels().len(), 64 * 32 * 3);
}

#[test]
fn test_integration_rejects_unsupported_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.png");
    std::fs::write(&path, "just some text, not an image").unwrap();
    assert!(matches!(ImageReader::read_image(&path), Err(Error::UnsupportedFormat(_))));

    let tiny = dir.path().join("tiny.jpg");
    std::fs::write(&tiny, [0xFF, 0xD8]).unwrap();
    assert!(matches!(ImageReader::read_image(&tiny), Err(Error::DecodeFailed(_))));
}
