use clap::{Parser, Subcommand, ValueEnum};
use framefit::imaging::{
    BorderSpec, CanvasSpec, CollageLayout, Orientation, OutputFormat, RustCodec,
};
use framefit::recipe::{self, Op};
use framefit::{batch, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "framefit")]
#[command(about = "Batch image framing: borders, canvases, grayscale, collages")]
#[command(long_about = "\
Batch image framing: borders, canvases, grayscale, collages

Point framefit at a directory of photos. Every supported image (jpg, png,
tiff, webp) directly inside it is processed; results land in the output
directory as PNG, named after the source file.

Examples:

  framefit ./photos border --width 40 --color 000000
  framefit ./photos canvas --ratio-x 4 --ratio-y 5
  framefit ./photos grayscale
  framefit ./photos collage --orientation vertical --gap 20
  framefit ./photos run --recipe print-prep.toml

A recipe file chains several operations in order:

  [[op]]
  kind = \"grayscale\"

  [[op]]
  kind = \"border\"
  width_px = 20
  color = \"000000\"")]
#[command(version)]
struct Cli {
    /// Directory of source images
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "framed", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert every image to grayscale
    Grayscale,
    /// Add a solid border around every image
    Border(BorderArgs),
    /// Pad every image onto a canvas with a target aspect ratio
    Canvas(CanvasArgs),
    /// Composite all images into one collage
    Collage(CollageArgs),
    /// Apply a recipe file's operations to every image
    Run(RunArgs),
}

#[derive(clap::Args)]
struct BorderArgs {
    /// Border thickness per side, in pixels (wins over --percent)
    #[arg(long)]
    width: Option<u32>,

    /// Border thickness as a percentage of each dimension
    #[arg(long)]
    percent: Option<u32>,

    /// Border color (hex, e.g. 000000)
    #[arg(long, default_value = "ffffff")]
    color: String,
}

#[derive(clap::Args)]
struct CanvasArgs {
    /// Target ratio, horizontal component
    #[arg(long)]
    ratio_x: f64,

    /// Target ratio, vertical component
    #[arg(long)]
    ratio_y: f64,

    /// Padding color (hex)
    #[arg(long, default_value = "ffffff")]
    color: String,
}

#[derive(clap::Args)]
struct CollageArgs {
    /// Stacking direction
    #[arg(long, value_enum, default_value_t = OrientationArg::Vertical)]
    orientation: OrientationArg,

    /// Clamp on the cross axis in pixels; 0 derives it from the smallest image
    #[arg(long, default_value_t = 0)]
    max_size: u32,

    /// Gap between adjacent images, in pixels
    #[arg(long, default_value_t = 0)]
    gap: u32,

    /// Gap color (hex)
    #[arg(long, default_value = "ffffff")]
    gap_color: String,

    /// Output file name, relative to the output directory
    #[arg(long, default_value = "collage.png")]
    out: String,
}

#[derive(clap::Args)]
struct RunArgs {
    /// TOML recipe file
    #[arg(long)]
    recipe: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Vertical,
    Horizontal,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Vertical => Orientation::Vertical,
            OrientationArg::Horizontal => Orientation::Horizontal,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let codec = RustCodec;
    let format = OutputFormat::Png;

    let paths = scan::scan_images(&cli.source)?;
    let entries = read_entries(&paths)?;

    match cli.command {
        Command::Collage(args) => {
            let layout = CollageLayout {
                orientation: args.orientation.into(),
                gap_px: args.gap,
                color: args.gap_color,
                max_size_px: args.max_size,
            };
            let collage = batch::collage_batch(&codec, &entries, &layout, format)?;
            std::fs::create_dir_all(&cli.output)?;
            let out_path = cli.output.join(&args.out);
            std::fs::write(&out_path, &collage.bytes)?;
            output::print_collage_output(
                entries.len(),
                collage.width,
                collage.height,
                collage.effective_gap,
                &out_path,
            );
        }
        command => {
            let ops = build_ops(command)?;
            let outcomes = batch::process_batch(&codec, &entries, &ops, format);
            std::fs::create_dir_all(&cli.output)?;
            for outcome in &outcomes {
                if let Ok(bytes) = &outcome.result {
                    let name = format!("{}.{}", outcome.id, format.extension());
                    std::fs::write(cli.output.join(name), bytes)?;
                }
            }
            output::print_batch_output(&outcomes, format.extension());
        }
    }

    Ok(())
}

/// Translate a per-image subcommand into its recipe.
fn build_ops(command: Command) -> Result<Vec<Op>, Box<dyn std::error::Error>> {
    let ops = match command {
        Command::Grayscale => vec![Op::Grayscale],
        Command::Border(args) => vec![Op::Border(BorderSpec {
            width_px: args.width,
            percent: args.percent,
            color: args.color,
        })],
        Command::Canvas(args) => {
            let spec = CanvasSpec {
                ratio_x: args.ratio_x,
                ratio_y: args.ratio_y,
                color: args.color,
            };
            if spec.is_noop() {
                eprintln!("Warning: ratio has a zero component; images pass through unchanged");
            }
            vec![Op::Canvas(spec)]
        }
        Command::Run(args) => recipe::load_recipe(&args.recipe)?,
        Command::Collage(_) => unreachable!("collage is handled separately"),
    };
    Ok(ops)
}

/// Read every source file into memory, keyed by its file stem.
fn read_entries(paths: &[PathBuf]) -> std::io::Result<Vec<(String, Vec<u8>)>> {
    paths
        .iter()
        .map(|path| {
            let stem = stem_of(path);
            let bytes = std::fs::read(path)?;
            Ok((stem, bytes))
        })
        .collect()
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string())
}
