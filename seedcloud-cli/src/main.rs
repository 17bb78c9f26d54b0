//! seedcloud command line
//!
//! Generate the scene for a seed, run a headless animation, or survey how
//! point counts spread over a range of seeds.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use seedcloud_algorithms::{GeneratorConfig, LayoutGenerator, LayoutPolicy};
use seedcloud_core::{Drawable, Seed};
use seedcloud_visualization::{HeadlessRenderer, SceneController};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seedcloud", version, about = "Deterministic 3D point clouds from 5-digit seeds")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Layout policy: volumetric, surface, neighbors[:k] or grid
    #[arg(short, long, global = true)]
    policy: Option<LayoutPolicy>,

    /// JSON generator configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the scene for one seed
    Generate {
        #[arg(default_value = "12345")]
        seed: String,
        /// Print the full scene description as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start a headless controller on the default seed, then submit each seed,
    /// rendering frames after every scene
    Animate {
        seeds: Vec<String>,
        #[arg(short, long, default_value_t = 60)]
        frames: u32,
    },
    /// Point count distribution over a seed range
    Survey {
        #[arg(long, default_value_t = 0)]
        from: u32,
        #[arg(long, default_value_t = 99_999)]
        to: u32,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize, PartialEq)]
struct Survey {
    policy: String,
    seeds: usize,
    min: usize,
    max: usize,
    mean: f64,
    histogram: BTreeMap<usize, usize>,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Config file if given, otherwise policy defaults; `--policy` wins over the file
fn load_config(path: Option<&Path>, policy: Option<LayoutPolicy>) -> Result<GeneratorConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let config: GeneratorConfig = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?;
            match policy {
                Some(policy) => config.with_policy(policy),
                None => config,
            }
        }
        None => GeneratorConfig::for_policy(policy.unwrap_or_default()),
    };
    config.validate()?;
    Ok(config)
}

fn survey(generator: &LayoutGenerator, from: u32, to: u32) -> Result<Survey> {
    if from > to || to > 99_999 {
        bail!("invalid seed range {from}..={to}");
    }

    let counts: Vec<usize> = (from..=to)
        .into_par_iter()
        .map(|value| {
            Seed::parse(&format!("{value:05}"))
                .map(|seed| generator.generate(&seed).point_count())
        })
        .collect::<seedcloud_core::Result<_>>()?;

    let mut histogram = BTreeMap::new();
    for &count in &counts {
        *histogram.entry(count).or_insert(0) += 1;
    }
    let total: usize = counts.iter().sum();

    Ok(Survey {
        policy: generator.policy().to_string(),
        seeds: counts.len(),
        min: counts.iter().copied().min().unwrap_or(0),
        max: counts.iter().copied().max().unwrap_or(0),
        mean: total as f64 / counts.len() as f64,
        histogram,
    })
}

fn run_frames(controller: &mut SceneController<HeadlessRenderer>, frames: u32) -> Result<()> {
    for _ in 0..frames {
        controller.frame()?;
    }
    let rotation = controller.rotation();
    println!("Rotation: x={:.5} y={:.5}", rotation.x, rotation.y);
    println!();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.policy)?;

    match cli.command {
        Command::Generate { seed, json } => {
            let seed = Seed::parse(&seed)?;
            let generator = LayoutGenerator::new(config)?;
            let scene = generator.generate(&seed);
            if json {
                println!("{}", serde_json::to_string_pretty(&scene)?);
            } else {
                let (min, max) = scene.bounding_box();
                println!("Seed: {}", scene.seed);
                println!("Policy: {}", scene.policy);
                println!("Points: {}", scene.point_count());
                println!("Connections: {}", scene.connection_count());
                println!("Boundary: {}", if scene.has_boundary() { "yes" } else { "no" });
                println!("Rotation Speed: {:.5}", scene.rotation_speed);
                println!(
                    "Bounds: ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
                    min.x, min.y, min.z, max.x, max.y, max.z
                );
            }
        }
        Command::Animate { seeds, frames } => {
            let mut controller = SceneController::start(HeadlessRenderer::new(), config)?;
            if let Some(stats) = controller.stats() {
                println!("{stats}");
            }
            run_frames(&mut controller, frames)?;
            for input in &seeds {
                match controller.submit(input) {
                    Ok(stats) => println!("{stats}"),
                    Err(err) => {
                        eprintln!("{err}");
                        continue;
                    }
                }
                run_frames(&mut controller, frames)?;
            }
            let renderer = controller.renderer();
            info!(
                frames = renderer.frames_drawn(),
                released = renderer.released(),
                live = renderer.live_resources(),
                "animation finished"
            );
        }
        Command::Survey { from, to, json } => {
            let generator = LayoutGenerator::new(config)?;
            let survey = survey(&generator, from, to)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&survey)?);
            } else {
                println!("Policy: {}", survey.policy);
                println!("Seeds: {}", survey.seeds);
                println!("Points: min {} max {} mean {:.2}", survey.min, survey.max, survey.mean);
                for (count, seeds) in &survey.histogram {
                    println!("{count:>5} {seeds}");
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
