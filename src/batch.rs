//! Batch execution: run a recipe over many images in parallel, or composite
//! the whole batch into one collage.
//!
//! Both entry points fan out across rayon's thread pool and collect results
//! in input order. Per-image transforms isolate failures (one corrupt file
//! does not abort the batch); a collage aborts on the first failure because
//! every member is required.

use crate::imaging::geometry::resized_gap;
use crate::imaging::{
    CodecError, CollageError, CollageLayout, ImageCodec, OutputFormat, PixelBuffer, TransformError,
    assemble,
};
use crate::recipe::{Op, apply_ops};
use rayon::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Collage(#[from] CollageError),
}

/// Result of one batch entry, tagged with its identifier (the file stem).
#[derive(Debug)]
pub struct BatchOutcome {
    pub id: String,
    pub result: Result<Vec<u8>, BatchError>,
}

/// Decode, transform, and re-encode every entry, in parallel.
///
/// Outcomes come back in input order regardless of scheduling; a failing
/// entry yields an `Err` outcome and the rest of the batch continues.
pub fn process_batch(
    codec: &dyn ImageCodec,
    entries: &[(String, Vec<u8>)],
    ops: &[Op],
    format: OutputFormat,
) -> Vec<BatchOutcome> {
    entries
        .par_iter()
        .map(|(id, bytes)| {
            let result = process_one(codec, bytes, ops, format);
            BatchOutcome {
                id: id.clone(),
                result,
            }
        })
        .collect()
}

fn process_one(
    codec: &dyn ImageCodec,
    bytes: &[u8],
    ops: &[Op],
    format: OutputFormat,
) -> Result<Vec<u8>, BatchError> {
    let decoded = codec.decode(bytes)?;
    let transformed = apply_ops(&decoded, ops)?;
    Ok(codec.encode(&transformed, format)?)
}

/// A finished collage plus the figures the summary reports.
#[derive(Debug)]
pub struct CollageOutput {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// The nominal gap rescaled to output resolution.
    pub effective_gap: f64,
}

/// Decode every entry in parallel and composite them into one image.
///
/// Unlike [`process_batch`], any decode failure aborts the whole run: a
/// collage with a member missing is not the collage that was asked for.
pub fn collage_batch(
    codec: &dyn ImageCodec,
    entries: &[(String, Vec<u8>)],
    layout: &CollageLayout,
    format: OutputFormat,
) -> Result<CollageOutput, BatchError> {
    let images: Vec<PixelBuffer> = entries
        .par_iter()
        .map(|(_, bytes)| codec.decode(bytes))
        .collect::<Result<_, _>>()?;

    let native: Vec<(u32, u32)> = images.iter().map(|i| (i.width(), i.height())).collect();
    let effective_gap = resized_gap(layout.gap_px, layout.orientation, &native, layout.max_size_px);

    let canvas = assemble(&images, layout)?;
    let (width, height) = (canvas.width(), canvas.height());
    let bytes = codec.encode(&canvas, format)?;

    Ok(CollageOutput {
        bytes,
        width,
        height,
        effective_gap,
    })
}
