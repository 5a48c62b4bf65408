//! # Framefit
//!
//! A batch image framing tool. Point it at a directory of photos and apply
//! one transform (or a recipe of several) to every image, or composite the
//! whole set into a single collage.
//!
//! # Architecture: Pure Core, Thin Shell
//!
//! Everything between decoding and encoding operates on in-memory RGBA
//! buffers and plain geometry:
//!
//! ```text
//! scan      directory      →  sorted file list
//! decode    bytes          →  PixelBuffer        (codec boundary)
//! transform PixelBuffer    →  PixelBuffer        (pure, per recipe op)
//! collage   [PixelBuffer]  →  PixelBuffer        (pure)
//! encode    PixelBuffer    →  bytes              (codec boundary)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: geometry and compositing are pure functions, so unit
//!   tests never need fixture files or a real decoder.
//! - **Parallelism**: each image's decode → transform → encode chain is
//!   independent, so batches fan out across a rayon pool trivially.
//! - **Portability**: the codec is a trait; the engine does not care where
//!   pixels come from.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists supported image files in the source directory, sorted by name |
//! | [`recipe`] | Ordered transform lists, built from CLI flags or loaded from TOML |
//! | [`batch`] | Parallel per-image execution and whole-batch collage assembly |
//! | [`imaging`] | The core: pixel buffers, geometry math, transforms, collage, codecs |
//! | [`output`] | CLI output formatting — per-image lines and run summaries |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging (No ImageMagick, No FFmpeg)
//!
//! The [`imaging`] module uses the `image` crate for decoding, Lanczos3
//! resampling, and encoding. No system dependencies: the binary is fully
//! self-contained and works the same on any machine.
//!
//! ## Failure Isolation Per Image
//!
//! A batch keeps going when one file is corrupt; the summary reports the
//! failure count. A collage is the opposite: every member is required, so
//! any decode failure aborts the run.

pub mod batch;
pub mod imaging;
pub mod output;
pub mod recipe;
pub mod scan;
