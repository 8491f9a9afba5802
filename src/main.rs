/*
 * Shoal
 *
 * A shoal of stylised fish following three flocking rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * The pointer acts as a force field: slow movement draws the fish into an
 * orbit around it, a fast swipe up close scatters them.
 */

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use shoal::app::{self, Settings};
use shoal::{SimulationParams, Theme};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shoal", version, about = "Interactive fish-shoal flocking animation")]
struct Cli {
    /// Number of normal fish (one highlighted fish is always added)
    #[arg(long, default_value_t = 80)]
    boids: usize,

    /// Seed for placement and jitter; omit for a fresh shoal every run
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 2.0)]
    max_speed: f32,

    /// Half-width of the per-frame random velocity noise
    #[arg(long, default_value_t = 0.05)]
    jitter: f32,

    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,
}

impl Cli {
    fn into_settings(self) -> Result<Settings> {
        let mut params = SimulationParams::default();
        params.num_boids = self.boids;
        params.max_speed = self.max_speed;
        params.jitter = self.jitter;
        params.validate().context("invalid simulation parameters")?;

        Ok(Settings {
            params,
            seed: self.seed,
            theme: self.theme.into(),
        })
    }
}

fn main() -> Result<()> {
    init_tracing();

    let settings = Cli::parse().into_settings()?;
    info!(
        boids = settings.params.num_boids,
        seed = ?settings.seed,
        theme = settings.theme.name(),
        "Starting shoal"
    );

    app::run(settings);
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
