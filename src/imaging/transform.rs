//! The transform family: pure functions from one pixel buffer to a new one.
//!
//! Every transform takes a buffer reference plus a typed spec and allocates
//! its result; inputs are never mutated in place. Specs carry colors as hex
//! strings (the options surface), parsed here via [`Rgb::parse`].

use super::buffer::PixelBuffer;
use super::color::{ColorError, Rgb};
use super::geometry::{Insets, adapted_size, border_insets, canvas_letterbox_insets};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Solid border around an image.
///
/// Exactly one of `width_px` / `percent` is authoritative; a positive
/// `width_px` wins when both are set. Neither set (or both zero) makes the
/// border a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSpec {
    /// Border thickness per side, in pixels.
    pub width_px: Option<u32>,
    /// Border thickness as a percentage of each image dimension (0-100).
    pub percent: Option<u32>,
    /// Fill color as a hex string.
    pub color: String,
}

/// Letterbox an image to the `ratio_x:ratio_y` aspect ratio.
///
/// A zero on either axis is the no-op sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSpec {
    pub ratio_x: f64,
    pub ratio_y: f64,
    /// Padding color as a hex string.
    pub color: String,
}

impl CanvasSpec {
    /// True when the requested ratio can never pad anything.
    pub fn is_noop(&self) -> bool {
        self.ratio_x <= 0.0 || self.ratio_y <= 0.0
    }
}

/// Average the color channels of every pixel; alpha is untouched.
///
/// Idempotent, and the empty sentinel passes through unchanged.
pub fn to_grayscale(buf: &PixelBuffer) -> PixelBuffer {
    let mut out = buf.clone();
    for px in out.data_mut().chunks_exact_mut(4) {
        let gray = ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8;
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
    }
    out
}

/// Surround the image with a solid border sized by [`border_insets`].
///
/// A no-op spec returns the input unchanged. A malformed color always fails
/// with [`ColorError::InvalidHex`], even for a no-op spec.
pub fn add_border(buf: &PixelBuffer, spec: &BorderSpec) -> Result<PixelBuffer, TransformError> {
    let color = Rgb::parse(&spec.color)?;
    let insets = border_insets(spec.width_px, spec.percent, buf.width(), buf.height());
    if insets.is_zero() {
        return Ok(buf.clone());
    }
    Ok(pad_onto_canvas(buf, insets, color))
}

/// Pad exactly one axis so the image reaches the spec's aspect ratio.
///
/// Returns the input unchanged when the ratio already matches or the spec
/// carries the zero-ratio sentinel.
pub fn add_canvas_letterbox(
    buf: &PixelBuffer,
    spec: &CanvasSpec,
) -> Result<PixelBuffer, TransformError> {
    let color = Rgb::parse(&spec.color)?;
    match canvas_letterbox_insets(spec.ratio_x, spec.ratio_y, buf.width(), buf.height()) {
        Some(insets) if !insets.is_zero() => Ok(pad_onto_canvas(buf, insets, color)),
        _ => Ok(buf.clone()),
    }
}

/// Shrink the buffer to fit within `max_w` x `max_h`, preserving its ratio
/// per [`adapted_size`]. Zero bounds or the empty sentinel pass through.
pub fn resize_adapted(buf: &PixelBuffer, max_w: u32, max_h: u32) -> PixelBuffer {
    if buf.is_empty() || max_w == 0 || max_h == 0 {
        return buf.clone();
    }
    let (w, h) = adapted_size(max_w, max_h, buf.width(), buf.height());
    buf.resample(w, h)
}

/// Allocate the padded canvas, fill it, blit the original centered.
fn pad_onto_canvas(buf: &PixelBuffer, insets: Insets, color: Rgb) -> PixelBuffer {
    let mut canvas = PixelBuffer::filled(
        buf.width() + insets.width,
        buf.height() + insets.height,
        color,
    );
    canvas.blit(buf, insets.width / 2, insets.height / 2);
    canvas
}
