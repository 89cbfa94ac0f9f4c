use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use neon_app::config::{self, AppError, SessionOptions};
use neon_app::core::constants::TICK_RATE;
use neon_app::game_loop::{self, SessionScript};
use neon_sim::{SimConfig, SimulationEngine};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "neon-headless failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let options = SessionOptions::from_args(std::env::args().skip(1))?;

    let config = match &options.config_path {
        Some(path) => config::load_config(path)?,
        None => SimConfig::default(),
    };
    info!(
        seed = config.seed,
        width = config.screen_width,
        height = config.screen_height,
        ticks = options.ticks,
        "neon-headless at {} Hz",
        TICK_RATE
    );

    let mut engine = SimulationEngine::new(config.clone())?;
    let mut fleet = game_loop::demo_fleet(&config);
    let script = SessionScript {
        ultimate_every: options.ultimate_every,
        ..SessionScript::centered(&config)
    };

    let outcome = game_loop::run_session(&mut engine, &mut fleet, &script, options.ticks, config.seed);

    println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
    if options.print_frame {
        if let Some(frame) = &outcome.last_frame {
            println!("{}", serde_json::to_string_pretty(frame)?);
        }
    }
    Ok(())
}
