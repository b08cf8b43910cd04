use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use cs_model::CreeperConfig;
use cs_render::{CreeperPlugin, StagePlugin, StageSettings};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cs-client", about = "Animated box creeper you can blow up")]
struct Args {
    /// TOML file with creeper settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the explosion particle directions.
    #[arg(long)]
    seed: Option<u64>,
    /// Fuse length between the last trigger and the explosion.
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Directory containing the face and skin textures.
    #[arg(long)]
    textures: Option<PathBuf>,
    /// Build the creeper without adding it to the scene.
    #[arg(long)]
    detached: bool,
    /// Hide the control panel; keyboard shortcuts still work.
    #[arg(long)]
    no_ui: bool,
}

fn resolve_settings(args: &Args) -> (CreeperConfig, StageSettings) {
    let mut config = match &args.config {
        Some(path) => CreeperConfig::load(path).unwrap_or_else(|err| {
            error!("{}; using defaults", err);
            CreeperConfig::default()
        }),
        None => CreeperConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.explosion_delay_ms = delay_ms;
    }
    if args.detached {
        config.self_register = false;
    }

    let mut stage = StageSettings::default();
    if let Some(textures) = &args.textures {
        stage.texture_root = textures.clone();
    }
    (config, stage)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .compact()
        .init();

    let args = Args::parse();
    let (config, stage) = resolve_settings(&args);
    info!(
        "Starting creeper stage (fuse {} ms, seed {:#x})",
        config.explosion_delay_ms, config.seed
    );

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Creeper".to_string(),
                    ..default()
                }),
                ..default()
            })
            .disable::<LogPlugin>(),
    )
    .add_plugins((CreeperPlugin { config }, StagePlugin { settings: stage }));

    if !args.no_ui {
        app.add_plugins(cs_ui::UiPlugin);
    }

    app.run();
}
