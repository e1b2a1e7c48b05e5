// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use fireworks_parallel::cli::{usage, CliArgs};
use fireworks_parallel::config::{AppConfig, DEFAULT_CONFIG_PATH};
use fireworks_parallel::utils::show_rust_core_dependencies;
use fireworks_parallel::{
    ConfigError, FireworksError, GlfwWindowEngine, HeadlessWindowEngine, PhysicEngine,
    PhysicEngineFireworks, Simulator, SimulatorSettings, WindowEngine,
};

/// Main entry point for the Fireworks Simulator application.
fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = exit_code(&e);
            match e.downcast_ref::<ConfigError>() {
                Some(ConfigError::MissingArguments { program }) => println!("{}", usage(program)),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::from(code)
        }
    }
}

fn exit_code(e: &anyhow::Error) -> u8 {
    if let Some(e) = e.downcast_ref::<FireworksError>() {
        e.exit_code()
    } else if let Some(e) = e.downcast_ref::<ConfigError>() {
        FireworksError::from(e.clone()).exit_code()
    } else {
        1
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    // Les arguments sont vérifiés avant toute autre chose
    let cli = CliArgs::parse(&args)?;

    info!("🚀 Starting Fireworks Simulator...");

    let AppConfig {
        physic: mut physic_config,
        simulator: settings,
    } = AppConfig::load(config_path())?;
    physic_config.apply_env_overrides()?;
    cli.apply_to(&mut physic_config);
    physic_config.validate()?;
    info!("Physic config loaded:\n{:#?}", physic_config);

    show_rust_core_dependencies(physic_config.worker_count().get());

    let headless_frames = match std::env::var("FIREWORKS_HEADLESS_FRAMES") {
        Ok(value) => Some(value.trim().parse::<u64>().map_err(|_| {
            ConfigError::InvalidInteger {
                name: "FIREWORKS_HEADLESS_FRAMES",
                value,
            }
        })?),
        Err(_) => None,
    };

    // 1. Init physic engine (pool de workers)
    let physic_engine = PhysicEngineFireworks::new(&physic_config)?;

    // 2. Init window & context, puis boucle
    match headless_frames {
        Some(frames) => {
            info!("Headless run: {} frame(s)", frames);
            simulate(physic_engine, HeadlessWindowEngine::new(frames), settings);
        }
        None => {
            let window_engine = GlfwWindowEngine::init(
                physic_config.screen_width as i32,
                physic_config.screen_height as i32,
                &settings.window_title,
            )?;
            simulate(physic_engine, window_engine, settings);
        }
    }

    Ok(())
}

/// `FIREWORKS_CONFIG` remplace le chemin par défaut du fichier de configuration.
fn config_path() -> PathBuf {
    std::env::var_os("FIREWORKS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn simulate<P: PhysicEngine, W: WindowEngine>(
    physic_engine: P,
    window_engine: W,
    settings: SimulatorSettings,
) {
    let mut simulator = Simulator::new(physic_engine, window_engine, settings);
    simulator.run();
    simulator.close();
}
