//! Collage assembly: normalize a set of images and composite them along one
//! axis with fixed gaps.
//!
//! Every member is resized on the orientation-perpendicular axis to a shared
//! clamp (its own ratio preserved), then blitted in input order onto a canvas
//! filled with the gap color. Vertical collages left-align, horizontal ones
//! top-align; there is no centering on the cross axis.

use super::buffer::PixelBuffer;
use super::color::{ColorError, Rgb};
use super::geometry::{
    Orientation, collage_canvas_size, collage_minimum_size, normalized_member_size,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollageError {
    #[error("collage needs at least 2 images, got {0}")]
    InsufficientImages(usize),
    #[error("image at index {0} has zero width or height")]
    EmptyImage(usize),
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// How a collage is laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct CollageLayout {
    pub orientation: Orientation,
    /// Gap between adjacent members, in pixels. Never before the first or
    /// after the last member.
    pub gap_px: u32,
    /// Canvas (gap) color as a hex string.
    pub color: String,
    /// Clamp on the orientation-perpendicular axis. 0 derives the clamp from
    /// the smallest member, so nothing is upscaled past native resolution.
    pub max_size_px: u32,
}

/// Combine `images` into one composited buffer per `layout`.
pub fn assemble(images: &[PixelBuffer], layout: &CollageLayout) -> Result<PixelBuffer, CollageError> {
    if images.len() < 2 {
        return Err(CollageError::InsufficientImages(images.len()));
    }
    if let Some(idx) = images.iter().position(|img| img.is_empty()) {
        return Err(CollageError::EmptyImage(idx));
    }
    let color = Rgb::parse(&layout.color)?;

    let native: Vec<(u32, u32)> = images.iter().map(|i| (i.width(), i.height())).collect();
    let (clamp_w, clamp_h) = if layout.max_size_px == 0 {
        collage_minimum_size(&native)
    } else {
        (layout.max_size_px, layout.max_size_px)
    };
    let clamp = match layout.orientation {
        Orientation::Vertical => clamp_w,
        Orientation::Horizontal => clamp_h,
    };

    let members: Vec<PixelBuffer> = images
        .iter()
        .map(|img| {
            let (w, h) = normalized_member_size(layout.orientation, clamp, img.width(), img.height());
            img.resample(w, h)
        })
        .collect();
    let member_sizes: Vec<(u32, u32)> = members.iter().map(|m| (m.width(), m.height())).collect();

    let (canvas_w, canvas_h) = collage_canvas_size(layout.orientation, &member_sizes, layout.gap_px);
    let mut canvas = PixelBuffer::filled(canvas_w, canvas_h, color);

    // Members advance along the layout axis; the cross axis stays at 0.
    let mut offset = 0u32;
    for member in &members {
        match layout.orientation {
            Orientation::Vertical => {
                canvas.blit(member, 0, offset);
                offset += member.height() + layout.gap_px;
            }
            Orientation::Horizontal => {
                canvas.blit(member, offset, 0);
                offset += member.width() + layout.gap_px;
            }
        }
    }
    Ok(canvas)
}
