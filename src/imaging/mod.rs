//! Image processing core.
//!
//! | Concern | Module |
//! |---|---|
//! | **Pixel storage & compositing** | [`buffer`] |
//! | **Dimension math** | [`geometry`] (pure, unit testable) |
//! | **Per-image transforms** | [`transform`] |
//! | **Multi-image collage** | [`collage`] |
//! | **Decode / encode boundary** | [`codec`] trait + [`rust_codec`] |
//!
//! Everything between decode and encode operates on [`PixelBuffer`]s and
//! never touches the filesystem, so the whole core is testable without
//! fixture files.

pub mod buffer;
pub mod codec;
pub mod collage;
pub mod color;
pub mod geometry;
pub mod rust_codec;
pub mod transform;

pub use buffer::PixelBuffer;
pub use codec::{CodecError, ImageCodec, OutputFormat};
pub use collage::{CollageError, CollageLayout, assemble};
pub use color::{ColorError, Rgb};
pub use geometry::Orientation;
pub use rust_codec::{RustCodec, SUPPORTED_EXTENSIONS};
pub use transform::{
    BorderSpec, CanvasSpec, TransformError, add_border, add_canvas_letterbox, resize_adapted,
    to_grayscale,
};
