//! Lossy size reduction with a raw fallback.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use studio_core::attachment::data_uri;

pub const COMPRESSED_MIME: &str = "image/jpeg";

/// Formats that are never recompressed: animation or vector content would
/// be lost.
const PASSTHROUGH_MIME: &[&str] = &["image/gif", "image/svg+xml"];

#[derive(Debug, Clone, Copy)]
pub struct CompressOptions {
    pub max_dimension: u32,
    pub quality: u8,
}

/// Which path produced the encoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Compressed,
    Raw,
}

#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub content: String,
    pub encoding: Encoding,
}

/// Decodes, flattens alpha onto white, bounds the longest edge and re-encodes
/// as JPEG.
pub fn compress(bytes: &[u8], options: CompressOptions) -> Result<Vec<u8>, image::ImageError> {
    let image = image::load_from_memory(bytes)?;
    let (width, height) = image.dimensions();
    let dim = options.max_dimension.max(1);

    let rgba = image.to_rgba8();
    let mut flattened = RgbaImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = u16::from(pixel[3]);
        let blend =
            |channel: u8| -> u8 { (((u16::from(channel) * alpha) + (255 * (255 - alpha))) / 255) as u8 };
        flattened.put_pixel(
            x,
            y,
            Rgba([blend(pixel[0]), blend(pixel[1]), blend(pixel[2]), 255]),
        );
    }

    let flattened = DynamicImage::ImageRgba8(flattened);
    let bounded = if width > dim || height > dim {
        flattened.resize(dim, dim, FilterType::Triangle)
    } else {
        flattened
    };

    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, options.quality.clamp(1, 100));
    encoder.encode_image(&bounded.to_rgb8())?;
    Ok(out)
}

/// Compressed output is kept only when it is smaller than the source.
pub fn encode_image(bytes: &[u8], mime_type: &str, options: Option<CompressOptions>) -> EncodedImage {
    if let Some(options) = options.filter(|_| !PASSTHROUGH_MIME.contains(&mime_type)) {
        match compress(bytes, options) {
            Ok(compressed) if compressed.len() < bytes.len() => {
                return EncodedImage {
                    content: data_uri(COMPRESSED_MIME, &compressed),
                    encoding: Encoding::Compressed,
                };
            }
            Ok(_) => {
                tracing::debug!(mime_type, "compression did not shrink image, using raw bytes");
            }
            Err(e) => {
                tracing::debug!(mime_type, error = %e, "compression failed, using raw bytes");
            }
        }
    }
    EncodedImage {
        content: data_uri(mime_type, bytes),
        encoding: Encoding::Raw,
    }
}
