//! Recipes: ordered lists of transforms applied to every image in a batch.
//!
//! A recipe is either built programmatically (the CLI subcommands each map to
//! a single-op recipe) or loaded from a TOML file for `run --recipe`:
//!
//! ```toml
//! [[op]]
//! kind = "grayscale"
//!
//! [[op]]
//! kind = "border"
//! width_px = 20
//! color = "000000"
//!
//! [[op]]
//! kind = "canvas"
//! ratio_x = 4.0
//! ratio_y = 5.0
//! ```

use crate::imaging::{
    BorderSpec, CanvasSpec, PixelBuffer, TransformError, add_border, add_canvas_letterbox,
    resize_adapted, to_grayscale,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("failed to read recipe file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse recipe file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("recipe contains no operations")]
    Empty,
}

/// One transform step. Ops apply in order, each consuming the previous
/// result.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Grayscale,
    Border(BorderSpec),
    Canvas(CanvasSpec),
    Resize { max_width: u32, max_height: u32 },
}

/// Run every op over `buf` in sequence.
pub fn apply_ops(buf: &PixelBuffer, ops: &[Op]) -> Result<PixelBuffer, TransformError> {
    let mut current = buf.clone();
    for op in ops {
        current = match op {
            Op::Grayscale => to_grayscale(&current),
            Op::Border(spec) => add_border(&current, spec)?,
            Op::Canvas(spec) => add_canvas_letterbox(&current, spec)?,
            Op::Resize {
                max_width,
                max_height,
            } => resize_adapted(&current, *max_width, *max_height),
        };
    }
    Ok(current)
}

// =============================================================================
// TOML surface
// =============================================================================

/// Top-level recipe file shape. Unknown keys are rejected so typos surface
/// as parse errors instead of silently dropped ops.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RecipeFile {
    #[serde(rename = "op")]
    ops: Vec<RecipeOp>,
}

fn default_color() -> String {
    "ffffff".to_string()
}

#[derive(Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RecipeOp {
    Grayscale,
    Border {
        width_px: Option<u32>,
        percent: Option<u32>,
        #[serde(default = "default_color")]
        color: String,
    },
    Canvas {
        ratio_x: f64,
        ratio_y: f64,
        #[serde(default = "default_color")]
        color: String,
    },
    Resize {
        max_width: u32,
        max_height: u32,
    },
}

impl From<RecipeOp> for Op {
    fn from(raw: RecipeOp) -> Self {
        match raw {
            RecipeOp::Grayscale => Op::Grayscale,
            RecipeOp::Border {
                width_px,
                percent,
                color,
            } => Op::Border(BorderSpec {
                width_px,
                percent,
                color,
            }),
            RecipeOp::Canvas {
                ratio_x,
                ratio_y,
                color,
            } => Op::Canvas(CanvasSpec {
                ratio_x,
                ratio_y,
                color,
            }),
            RecipeOp::Resize {
                max_width,
                max_height,
            } => Op::Resize {
                max_width,
                max_height,
            },
        }
    }
}

/// Parse recipe TOML into an op list. Fails on an empty op list.
pub fn parse_recipe(content: &str) -> Result<Vec<Op>, RecipeError> {
    let file: RecipeFile = toml::from_str(content)?;
    if file.ops.is_empty() {
        return Err(RecipeError::Empty);
    }
    Ok(file.ops.into_iter().map(Op::from).collect())
}

/// Load and parse a recipe file from disk.
pub fn load_recipe(path: &Path) -> Result<Vec<Op>, RecipeError> {
    let content = fs::read_to_string(path)?;
    parse_recipe(&content)
}
