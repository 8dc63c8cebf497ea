//! `planvec` CLI: decode a floor-plan image, extract wall segments, print
//! them as JSON on stdout.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use planvec::extract;
use planvec::TraceParams;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("failed to read image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Trace(#[from] planvec::TraceError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "planvec", version, about = "Floor-plan wall extraction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract wall segments from a raster floor plan.
    Trace(TraceArgs),
}

#[derive(Args)]
struct TraceArgs {
    /// Input image (any format the `image` crate decodes).
    image: PathBuf,

    /// Luminance threshold; pixels darker than this are ink.
    #[arg(long, default_value_t = 200)]
    threshold: u8,

    /// Minimum foreground run length in pixels.
    #[arg(long, default_value_t = 15)]
    min_line_length: u32,

    /// Stride between sampled scan rows/columns.
    #[arg(long, default_value_t = 5)]
    scan_gap: u32,

    /// Cross-axis tolerance for dropping overlapping duplicates.
    #[arg(long, default_value_t = 5.0)]
    duplicate_tolerance: f32,

    /// Tolerance for fusing collinear, endpoint-adjacent segments.
    #[arg(long, default_value_t = 10.0)]
    merge_tolerance: f32,

    /// Endpoint-delta tolerance for horizontal/vertical classification.
    #[arg(long, default_value_t = 5.0)]
    orientation_tolerance: f32,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Log pipeline stage counts to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl TraceArgs {
    fn params(&self) -> TraceParams {
        TraceParams {
            threshold: self.threshold,
            min_line_length: self.min_line_length,
            scan_gap: self.scan_gap,
            duplicate_tolerance: self.duplicate_tolerance,
            merge_tolerance: self.merge_tolerance,
            orientation_tolerance: self.orientation_tolerance,
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Trace(args) => {
            if args.verbose {
                let _ = planvec_core::init_with_level(LevelFilter::Debug);
            }

            let img = image::open(&args.image)?.to_rgba8();
            let walls = extract::trace_walls_image(&img, &args.params())?;

            let json = if args.pretty {
                serde_json::to_string_pretty(&walls)?
            } else {
                serde_json::to_string(&walls)?
            };
            println!("{json}");
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
