use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mandelbrot_explorer::{
    BackendKind, CommandHandler, Explorer, ExplorerConfig, MandelbrotColourMapKinds, PpmSurface,
    Repl, load_backend, mandelbrot_colour_map_factory,
};

#[derive(Parser)]
#[command(name = "mandelbrot-explorer", about = "Interactive Mandelbrot set explorer")]
#[command(version)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Compute backend
    #[arg(long, value_enum)]
    backend: Option<BackendKind>,

    /// Colour gradient
    #[arg(long, value_enum)]
    colour_map: Option<MandelbrotColourMapKinds>,

    /// Directory for frames written by the headless surface
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Write frames to disk instead of opening windows
    #[arg(long)]
    headless: bool,

    /// Seed for choosing tour points
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    println!("Initializing Mandelbrot Simulation");

    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExplorerConfig::default(),
    };

    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    if let Some(colour_map) = cli.colour_map {
        config.colour_map = colour_map;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    let points = config.sample_points()?;
    let backend = load_backend(config.backend)
        .with_context(|| format!("Mandelbrot compute backend '{}' not available", config.backend))?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let colour_map = mandelbrot_colour_map_factory(config.colour_map);

    info!(
        backend = %config.backend,
        colour_map = %config.colour_map,
        points = points.len(),
        "explorer ready"
    );

    #[cfg(feature = "gui")]
    if !cli.headless {
        let surface = mandelbrot_explorer::PixelsSurface::new(colour_map)
            .context("Failed to open the window system")?;
        return run_repl(Explorer::new(backend, surface, points, rng));
    }

    #[cfg(not(feature = "gui"))]
    if !cli.headless {
        info!("built without the gui feature, writing frames to disk");
    }

    let surface = PpmSurface::new(config.output_dir, colour_map);
    run_repl(Explorer::new(backend, surface, points, rng))
}

fn run_repl<H: CommandHandler>(mut handler: H) -> Result<()> {
    let mut repl = Repl::new(io::stdin().lock(), io::stdout());
    repl.run(&mut handler)?;

    Ok(())
}
