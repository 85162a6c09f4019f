use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use mirror_tracer::catalogue::SceneCatalogue;
use mirror_tracer::config::RenderConfig;
use mirror_tracer::ppm::PpmImage;
use mirror_tracer::render::{render, Framebuffer};
use mirror_tracer::scene::load_scene;

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "mirror-tracer")]
#[command(about = "Recursive ray tracer with Phong shading, shadows and mirror reflections")]
struct Args {
    /// Built-in scene to render (1-4); a scene file is appended after them
    #[arg(short, long, default_value = "1")]
    scene: usize,

    /// JSON scene declaration to load and render instead of a built-in scene
    #[arg(long)]
    scene_file: Option<PathBuf>,

    /// JSON render configuration (image size, eye, background, depth limit)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Deepest reflection level followed
    #[arg(long)]
    depth_limit: Option<u32>,

    /// Seed for the random sphere grid scene
    #[arg(long, default_value = "2015")]
    seed: u64,

    #[arg(short, long, default_value = "out/output.ppm")]
    output: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(depth_limit) = args.depth_limit {
        config.depth_limit = depth_limit;
    }
    config.validate()?;

    let mut catalogue = SceneCatalogue::builtin(args.seed);
    let number = match &args.scene_file {
        Some(path) => catalogue.add(load_scene(path).with_context(|| format!("loading scene {}", path.display()))?),
        None => args.scene,
    };
    let scene = catalogue.select(number)?;

    info!("Drawing scene {}...", number);
    let tracer = config.tracer(scene);
    let mut framebuffer = Framebuffer::new(config.width, config.height);
    render(&tracer, &mut framebuffer);

    PpmImage::from_framebuffer(&framebuffer)
        .write_to_file(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("Wrote {}", args.output.display());

    Ok(())
}
