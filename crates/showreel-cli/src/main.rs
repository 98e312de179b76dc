use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use showreel_core::hash::hash_frames;
use showreel_core::{FrameBuffer, PixelFormat, ShowreelConfig};
use showreel_render::{FrameSequenceSource, Player, VideoSource};

#[derive(Parser)]
#[command(
    name = "showreel",
    version,
    about = "Showreel — sequential clip compositing on one canvas",
    long_about = "Showreel composites a set of video clips onto a single canvas.\nClips are decoded as image sequences, scheduled by a composition mode,\nand rendered offline one frame per step."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a configured clip set and render frames offline
    Play {
        /// Path to the showreel .toml configuration
        #[arg()]
        config: PathBuf,

        /// Number of frames to render
        #[arg(short, long, default_value_t = 60)]
        frames: usize,

        /// Directory to write rendered frames into as PNGs
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate a configuration without rendering
    Check {
        /// Path to the showreel .toml configuration
        #[arg()]
        config: PathBuf,
    },

    /// Display version and engine info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Play { config, frames, out } => cmd_play(config, frames, out),
        Commands::Check { config } => cmd_check(config),
        Commands::Info => cmd_info(),
    }
}

fn load_sources(config: &ShowreelConfig) -> Result<Vec<Box<dyn VideoSource>>> {
    let mut sources: Vec<Box<dyn VideoSource>> = Vec::with_capacity(config.clips.len());
    for dir in &config.clips {
        let source = FrameSequenceSource::from_dir(dir)
            .with_context(|| format!("failed to load clip from {}", dir.display()))?;
        sources.push(Box::new(source));
    }
    Ok(sources)
}

fn cmd_play(config_path: PathBuf, frames: usize, out: Option<PathBuf>) -> Result<()> {
    let config = ShowreelConfig::load_from_file(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let sources = load_sources(&config)?;
    let background = config.stage.background_color()?;

    let mut player =
        Player::new(config.stage.width, config.stage.height).with_background(background);
    if let Err(e) = player.start_mode(&config.mode, sources) {
        error!("cannot start playback: {e}");
        return Err(e.into());
    }

    if let Some(dir) = &out {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let mut rendered = Vec::with_capacity(frames);
    for i in 0..frames {
        let frame = player.step().clone();
        if let Some(dir) = &out {
            save_frame(&frame, &dir.join(format!("frame_{i:05}.png")))?;
        }
        rendered.push(frame);
    }

    let hash = hash_frames(&rendered);
    info!(frames, "playback finished");

    let summary = run_summary(&config, frames, &hash.to_hex());
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Summary of a playback run: stage parameters, rendered frame count,
/// the clip duration they cover at the configured rate, and the content
/// hash for bit-exact comparison across runs.
fn run_summary(config: &ShowreelConfig, frames: usize, hash_hex: &str) -> serde_json::Value {
    serde_json::json!({
        "mode": config.mode,
        "frames": frames,
        "width": config.stage.width,
        "height": config.stage.height,
        "fps": config.stage.fps,
        "duration_seconds": frames as f64 / config.stage.fps,
        "content_hash": hash_hex,
    })
}

fn save_frame(frame: &FrameBuffer, path: &PathBuf) -> Result<()> {
    let image = match frame.format {
        PixelFormat::Rgba8 => {
            image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
                .context("frame buffer size mismatch")?
        }
        PixelFormat::Rgb8 => {
            let rgb = image::RgbImage::from_raw(frame.width, frame.height, frame.data.clone())
                .context("frame buffer size mismatch")?;
            image::DynamicImage::ImageRgb8(rgb).to_rgba8()
        }
    };
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn cmd_check(config_path: PathBuf) -> Result<()> {
    let config = ShowreelConfig::load_from_file(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    config
        .mode
        .parse::<showreel_render::CompositionMode>()
        .map_err(|e| {
            error!("{e}");
            e
        })?;
    config.stage.background_color()?;

    for dir in &config.clips {
        if !dir.is_dir() {
            anyhow::bail!("clip directory not found: {}", dir.display());
        }
    }

    println!(
        "OK: {} ({} clips, mode '{}', {}x{} @ {} fps)",
        config_path.display(),
        config.clips.len(),
        config.mode,
        config.stage.width,
        config.stage.height,
        config.stage.fps
    );
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("🎞  Showreel Compositing Engine");
    println!("   Version:   {}", env!("CARGO_PKG_VERSION"));
    println!("   Renderer:  CPU (single-threaded)");
    println!("   Modes:     nop (passthrough), crossfade (stub)");
    println!("   Clips:     image sequence directories (png/jpg/bmp)");
    println!();
    println!("   Repository: https://github.com/showreel-dev/showreel");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_summary_reports_stage_rate() {
        let mut config = ShowreelConfig::default();
        config.stage.fps = 25.0;
        let summary = run_summary(&config, 50, "abc123");
        assert_eq!(summary["fps"], 25.0);
        assert_eq!(summary["duration_seconds"], 2.0);
        assert_eq!(summary["frames"], 50);
        assert_eq!(summary["content_hash"], "abc123");
        assert_eq!(summary["mode"], "nop");
    }
}
