use std::path::PathBuf;
use std::process;

use clap::Parser;

use rasterfilter_core::filtering::domain::kernel::Kernel3x3;
use rasterfilter_core::filtering::infrastructure::filter_factory::{create_filter, ExecutionMode};
use rasterfilter_core::shared::frame::Frame;

/// Apply a 3x3 convolution kernel to an image.
#[derive(Parser)]
#[command(name = "rasterfilter")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// Nine row-major kernel values (comma-separated).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    kernel: Option<Vec<f32>>,

    /// Scalar multiplier applied to every kernel value.
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    multiplier: f32,

    /// Named kernel: identity, box-blur, gaussian-blur, sharpen,
    /// edge-detect, emboss.
    #[arg(long)]
    preset: Option<String>,

    /// Worker threads for row-parallel convolution (0 = all CPUs).
    #[arg(long, default_value = "1")]
    threads: usize,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let kernel = build_kernel(&cli)?;

    let img = image::open(&cli.input)?.to_rgba8();
    let (width, height) = img.dimensions();
    let frame = Frame::from_rgba(img.into_raw(), width, height)?;

    let filter = create_filter(kernel, execution_mode(cli.threads));
    let filtered = filter.apply(&frame)?;

    let out = image::RgbaImage::from_raw(width, height, filtered.into_raw())
        .ok_or("Failed to build output image from filtered data")?;
    out.save(&cli.output)?;
    log::info!("Output written to {}", cli.output.display());

    Ok(())
}

fn build_kernel(cli: &Cli) -> Result<Kernel3x3, Box<dyn std::error::Error>> {
    match (&cli.kernel, &cli.preset) {
        (Some(_), Some(_)) => Err("Pass either --kernel or --preset, not both".into()),
        (None, None) => Err("A kernel is required: pass --kernel or --preset".into()),
        (Some(values), None) => {
            let coefficients: [f32; 9] = values
                .as_slice()
                .try_into()
                .map_err(|_| format!("--kernel needs exactly 9 values, got {}", values.len()))?;
            Ok(Kernel3x3::new(coefficients, cli.multiplier)?)
        }
        (None, Some(name)) => parse_preset(name),
    }
}

fn parse_preset(name: &str) -> Result<Kernel3x3, Box<dyn std::error::Error>> {
    match name {
        "identity" => Ok(Kernel3x3::identity()),
        "box-blur" => Ok(Kernel3x3::box_blur()),
        "gaussian-blur" => Ok(Kernel3x3::gaussian_blur()),
        "sharpen" => Ok(Kernel3x3::sharpen()),
        "edge-detect" => Ok(Kernel3x3::edge_detect()),
        "emboss" => Ok(Kernel3x3::emboss()),
        other => Err(format!(
            "Unknown preset '{other}', expected one of: identity, box-blur, \
             gaussian-blur, sharpen, edge-detect, emboss"
        )
        .into()),
    }
}

fn execution_mode(threads: usize) -> ExecutionMode {
    if threads == 1 {
        ExecutionMode::SingleThreaded
    } else {
        ExecutionMode::Threaded { threads }
    }
}
