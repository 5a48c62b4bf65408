//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Batch
//!
//! ```text
//! 001 dawn
//!     Output: dawn.png
//! 002 mountains
//!     Failed: failed to decode image: ...
//!
//! Processed 2 images, 1 failed
//! ```
//!
//! ## Collage
//!
//! ```text
//! Collage: 3 images → 100x453
//!     Gap: ~9px at output scale
//!     Output: framed/collage.png
//! ```
//!
//! # Architecture
//!
//! Each surface has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::batch::BatchOutcome;
use std::path::Path;

/// Zero-padded positional index: 1 → "001".
fn format_index(index: usize) -> String {
    format!("{:0>3}", index)
}

/// Per-image lines plus a summary for a finished batch.
pub fn format_batch_output(outcomes: &[BatchOutcome], extension: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut failed = 0usize;

    for (i, outcome) in outcomes.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), outcome.id));
        match &outcome.result {
            Ok(_) => lines.push(format!("    Output: {}.{}", outcome.id, extension)),
            Err(err) => {
                failed += 1;
                lines.push(format!("    Failed: {}", err));
            }
        }
    }

    lines.push(String::new());
    if failed == 0 {
        lines.push(format!("Processed {} images", outcomes.len()));
    } else {
        lines.push(format!(
            "Processed {} images, {} failed",
            outcomes.len(),
            failed
        ));
    }
    lines
}

/// Summary block for a finished collage.
pub fn format_collage_output(
    image_count: usize,
    width: u32,
    height: u32,
    effective_gap: f64,
    out_path: &Path,
) -> Vec<String> {
    let mut lines = vec![format!(
        "Collage: {} images → {}x{}",
        image_count, width, height
    )];
    if effective_gap > 0.0 {
        lines.push(format!(
            "    Gap: ~{}px at output scale",
            effective_gap.round() as u32
        ));
    }
    lines.push(format!("    Output: {}", out_path.display()));
    lines
}

pub fn print_batch_output(outcomes: &[BatchOutcome], extension: &str) {
    for line in format_batch_output(outcomes, extension) {
        println!("{}", line);
    }
}

pub fn print_collage_output(
    image_count: usize,
    width: u32,
    height: u32,
    effective_gap: f64,
    out_path: &Path,
) {
    for line in format_collage_output(image_count, width, height, effective_gap, out_path) {
        println!("{}", line);
    }
}
