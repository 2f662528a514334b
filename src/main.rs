use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use vidmark::draw::Bounds;
use vidmark::{Config, Overlay, session};

#[derive(Parser, Debug)]
#[command(name = "vidmark")]
#[command(version, about = "Annotation overlay engine for video playback")]
struct Cli {
    /// Read settings from this file instead of ~/.config/vidmark/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint an exchange file onto a transparent canvas and save it as PNG
    Render {
        /// Exchange file (JSON array of shapes)
        input: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value_t = 1280.0)]
        width: f64,

        /// Canvas height in pixels
        #[arg(long, default_value_t = 720.0)]
        height: f64,

        /// Destination PNG
        #[arg(long, short = 'o', value_name = "PNG")]
        output: PathBuf,
    },

    /// Validate an exchange file and summarise its shapes
    Check {
        /// Exchange file (JSON array of shapes)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            input,
            width,
            height,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            render(&config, &input, Bounds::new(width, height), &output)
        }
        Command::Check { input } => check(&input),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn read_exchange(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read shapes from {}", path.display()))
}

fn render(config: &Config, input: &Path, bounds: Bounds, output: &Path) -> Result<()> {
    let data = read_exchange(input)?;

    let mut overlay = Overlay::attach(move || bounds, config.overlay_options())
        .context("Failed to create drawing surface")?;
    let count = overlay
        .restore(&data)
        .with_context(|| format!("Invalid shape data in {}", input.display()))?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    overlay
        .surface()
        .write_png(&mut writer)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!(
        "Rendered {count} shapes to {} ({}x{})",
        output.display(),
        overlay.surface().width(),
        overlay.surface().height()
    );
    println!("Rendered {count} shapes to {}", output.display());
    Ok(())
}

fn check(input: &Path) -> Result<()> {
    let data = read_exchange(input)?;
    let shapes = session::parse_shapes(&data)
        .with_context(|| format!("Invalid shape data in {}", input.display()))?;

    let mut per_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for shape in &shapes {
        *per_kind.entry(shape.kind_name()).or_default() += 1;
    }

    println!("{}: {} shapes", input.display(), shapes.len());
    for (kind, count) in per_kind {
        println!("  {kind}: {count}");
    }
    Ok(())
}
