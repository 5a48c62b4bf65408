//! Codec boundary: decoding source bytes into pixel buffers and encoding
//! results back out.
//!
//! The engine never touches compressed bytes directly; everything upstream
//! of [`ImageCodec::decode`] and downstream of [`ImageCodec::encode`] is
//! plumbing. The production implementation is
//! [`RustCodec`](super::rust_codec::RustCodec).

use super::buffer::PixelBuffer;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("failed to encode image: {0}")]
    Encode(String),
}

/// Output encodings the CLI can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

/// Trait for image codecs.
///
/// `Sync` so one codec instance can be shared across rayon workers; both
/// operations are stateless per call.
pub trait ImageCodec: Sync {
    /// Decode compressed bytes into an RGBA buffer.
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, CodecError>;

    /// Encode a buffer into the given output format.
    fn encode(&self, buf: &PixelBuffer, format: OutputFormat) -> Result<Vec<u8>, CodecError>;
}
