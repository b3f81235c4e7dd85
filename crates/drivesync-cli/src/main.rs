use anyhow::Result;
use log::LevelFilter;

use drivesync_cli::cli;
use drivesync_cli::render::{input, runner};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DRIVESYNC_LOG", "error,drivesync=info"))
        .init();

    let matches = cli().get_matches();

    let config = match input::from_arguments(&matches) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {:#}", e);
            std::process::exit(1)
        }
    };

    if matches.get_flag("print_config") {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    match runner::run_render(&config) {
        Ok(outcome) => {
            log::info!("[DriveSync] Figure written to {}", outcome.png.display());
            Ok(())
        }
        Err(e) => {
            log::error!("Rendering failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
