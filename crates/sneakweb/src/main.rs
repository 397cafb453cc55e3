use std::process::ExitCode;

use dotenvy::dotenv;
use sneakcore::{init_logger, install_panic_hook, LogConfig, WebConfig};
use sneakweb::cli::Cli;
use sneakweb::{run_server, GamePage};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    install_panic_hook();

    // Load environment variables from .env if present
    let _ = dotenv();
    let env_file_result = cli.env_file.as_ref().map(dotenvy::from_path_override);

    let log_config = match LogConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid logging configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logger(&log_config) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    if let (Some(path), Some(Err(e))) = (&cli.env_file, env_file_result) {
        log::error!("Failed to load env file {}: {}", path.display(), e);
        return ExitCode::FAILURE;
    }

    let config = match WebConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = match cli.port {
        Some(port) => config.with_port(port),
        None => config,
    };

    let page = match GamePage::load(config.game_page.as_deref()) {
        Ok(page) => page,
        Err(e) => {
            log::error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_server(&config, page).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Web server failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
