#![deny(unsafe_code)]
//! CLI binary for the driftfield backdrop system.
//!
//! Subcommands:
//! - `render <scene>` — run a scene N frames at a fixed timestep, write PNG
//! - `list` — print available scenes

mod error;

use clap::{Parser, Subcommand};
use driftfield_scenes::player::Player;
use driftfield_scenes::raster::RasterSurface;
use driftfield_scenes::SceneKind;
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "driftfield", about = "Animated backdrop renderer CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scene for N frames and write a PNG snapshot of the last one.
    Render {
        /// Scene name (e.g. "field").
        scene: String,

        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 1280)]
        width: u32,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 720)]
        height: u32,

        /// Number of frames to run.
        #[arg(short, long, default_value_t = 300)]
        frames: usize,

        /// Frames per second of the fixed timestep.
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// PRNG seed for deterministic layout.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Simulate a pointer at "x,y" before the first frame.
        #[arg(long)]
        pointer: Option<String>,

        /// Output file path.
        #[arg(short, long, default_value = "field.png")]
        output: PathBuf,

        /// Scene parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available scenes.
    List,
}

/// Parses an "x,y" pointer coordinate.
fn parse_pointer(s: &str) -> Result<(f64, f64), CliError> {
    let bad = || CliError::Input(format!("invalid --pointer '{s}': expected \"x,y\""));
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(bad());
    }
    Ok((x, y))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let scenes = SceneKind::list_scenes();
            if cli.json {
                let info = serde_json::json!({ "scenes": scenes });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Scenes:");
                for name in scenes {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            scene,
            width,
            height,
            frames,
            fps,
            seed,
            pointer,
            output,
            params,
        } => {
            if !(fps.is_finite() && fps > 0.0) {
                return Err(CliError::Input(format!("invalid --fps {fps}: must be positive")));
            }
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let kind = SceneKind::from_name(&scene, width as f64, height as f64, seed, &params)?;
            let surface = RasterSurface::new(width, height)?;
            let mut player = Player::new(kind, surface);
            player.start();

            if let Some(coords) = pointer.as_deref() {
                let (x, y) = parse_pointer(coords)?;
                player.pointer_moved(x, y);
            }

            for frame in 0..frames {
                player.frame(frame as f64 / fps);
            }

            driftfield_scenes::snapshot::write_png(player.surface(), &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "scene": scene,
                    "width": width,
                    "height": height,
                    "frames": frames,
                    "seed": seed,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {scene} ({width}x{height}, {frames} frames, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
