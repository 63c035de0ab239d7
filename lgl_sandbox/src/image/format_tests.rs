use super::*;

#[test]
fn test_detect_jpeg() {
    assert_eq!(ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10]), ImageFormat::Jpeg);
}

#[test]
fn test_detect_png() {
    let header = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
    assert_eq!(ImageFormat::detect(&header), ImageFormat::Png);
}

#[test]
fn test_detect_rejects_partial_signatures() {
    // SOI alone without a following marker byte
    assert_eq!(ImageFormat::detect(&[0xFF, 0xD8]), ImageFormat::Unknown);
    assert_eq!(ImageFormat::detect(&[0x89, b'P', b'N', b'G']), ImageFormat::Unknown);
    assert_eq!(ImageFormat::detect(b"GIF89a......"), ImageFormat::Unknown);
    assert_eq!(ImageFormat::detect(&[]), ImageFormat::Unknown);
}

#[test]
fn test_pixel_format_from_channels() {
    assert_eq!(PixelFormat::from_channels(1), Some(PixelFormat::Red));
    assert_eq!(PixelFormat::from_channels(2), Some(PixelFormat::Rg));
    assert_eq!(PixelFormat::from_channels(3), Some(PixelFormat::Rgb));
    assert_eq!(PixelFormat::from_channels(4), Some(PixelFormat::Rgba));
    assert_eq!(PixelFormat::from_channels(0), None);
    assert_eq!(PixelFormat::from_channels(5), None);
    assert_eq!(PixelFormat::Rgba.channels(), 4);
}
