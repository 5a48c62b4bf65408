//! Production codec backed by the `image` crate.

use super::buffer::PixelBuffer;
use super::codec::{CodecError, ImageCodec, OutputFormat};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// File extensions the scanner accepts, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "webp"];

/// JPEG output quality (1-100).
const JPEG_QUALITY: u8 = 90;

/// Codec using the pure-Rust `image` crate decoders and encoders.
pub struct RustCodec;

impl ImageCodec for RustCodec {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, CodecError> {
        let img = image::load_from_memory(bytes).map_err(|e| CodecError::Decode(e.to_string()))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        PixelBuffer::from_raw(width, height, rgba.into_raw())
            .ok_or_else(|| CodecError::Decode("decoded buffer has inconsistent length".into()))
    }

    fn encode(&self, buf: &PixelBuffer, format: OutputFormat) -> Result<Vec<u8>, CodecError> {
        if buf.is_empty() {
            return Err(CodecError::Encode("refusing to encode an empty image".into()));
        }
        let mut out = Vec::new();
        match format {
            OutputFormat::Png => {
                PngEncoder::new(&mut out)
                    .write_image(buf.data(), buf.width(), buf.height(), ExtendedColorType::Rgba8)
                    .map_err(|e| CodecError::Encode(e.to_string()))?;
            }
            OutputFormat::Jpeg => {
                // JPEG has no alpha channel; flatten to RGB first.
                let rgba =
                    image::RgbaImage::from_raw(buf.width(), buf.height(), buf.data().to_vec())
                        .ok_or_else(|| {
                            CodecError::Encode("buffer has inconsistent length".into())
                        })?;
                let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
                JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
                    .write_image(rgb.as_raw(), buf.width(), buf.height(), ExtendedColorType::Rgb8)
                    .map_err(|e| CodecError::Encode(e.to_string()))?;
            }
        }
        Ok(out)
    }
}
