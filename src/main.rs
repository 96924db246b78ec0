use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use spiralcal::{convert_svg_to_png, generate_svg, LayoutConfig, PosterConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// Spiral calendar with month, year and date labels
    Spiral,
    /// Spiral calendar with day ticks sized by day length
    Solar,
    /// One week around a ring
    Week,
}

#[derive(Parser, Debug)]
#[command(name = "spiralcal")]
#[command(about = "Draw spiral calendar and week ring posters as SVG or PNG", long_about = None)]
struct Args {
    /// Path to a JSON poster configuration (a preset is used when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output file path (defaults to calendar.svg or week.svg)
    /// Use .svg extension to export as SVG, .png for PNG
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Built-in configuration to start from when no CONFIG is given
    #[arg(long, value_enum, default_value_t = Preset::Solar)]
    preset: Preset,

    /// Draw today's tick heavier (spiral layouts only)
    #[arg(long)]
    today: bool,

    /// Resolution for PNG output
    #[arg(long, value_name = "DPI")]
    dpi: Option<u32>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Log level; RUST_LOG overrides it
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = spiralcal::logging::init_logging(&args.log_level)
        .context("Failed to initialize logging")?;

    let mut config = match &args.config {
        Some(path) => PosterConfig::load(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => match args.preset {
            Preset::Spiral => PosterConfig::spiral(),
            Preset::Solar => PosterConfig::solar(),
            Preset::Week => PosterConfig::week(),
        }
        .context("Failed to load built-in preset")?,
    };

    if args.today {
        if let LayoutConfig::Spiral(spiral) = &mut config.layout {
            spiral.highlight = Some(chrono::Local::now().date_naive());
        }
    }

    if args.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(config.default_output()));

    let svg_content = generate_svg(&config).context("Failed to generate SVG")?;

    // Check if output is SVG or PNG based on extension
    let extension = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("svg");

    match extension.to_lowercase().as_str() {
        "png" => {
            convert_svg_to_png(&svg_content, &output_path, args.dpi)
                .with_context(|| format!("Failed to convert to PNG: {}", output_path.display()))?;
        }
        _ => {
            fs::write(&output_path, svg_content)
                .with_context(|| format!("Failed to write SVG file: {}", output_path.display()))?;
        }
    }

    info!("wrote {}", output_path.display());
    Ok(())
}
