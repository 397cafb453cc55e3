use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;
use sneakbot::cli::Cli;
use sneakbot::telegram::{
    create_bot, log_unhandled_update, schema, setup_bot_commands, HandlerDeps, UpdateErrorHandler,
};
use sneakcore::{init_logger, install_panic_hook, shutdown_signal, AppResult, BotConfig, LogConfig};
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

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

    // Fail before any network request when the token is missing
    let mut config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if cli.keep_pending {
        config.drop_pending_updates = false;
    }

    match run_bot(Arc::new(config)).await {
        Ok(()) => {
            log::info!("Bot stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Bot terminated: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs long polling until a termination signal arrives.
async fn run_bot(config: Arc<BotConfig>) -> AppResult<()> {
    log::info!("Starting SneakDog bot (launch URL: {})", config.launch_url);

    let bot = create_bot(&config)?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let handler = schema(HandlerDeps::new(Arc::clone(&config)));
    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .error_handler(UpdateErrorHandler::new())
        .default_handler(log_unhandled_update)
        .build();

    let shutdown_token = dispatcher.shutdown_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        match shutdown_token.shutdown() {
            Ok(done) => {
                done.await;
                log::info!("Dispatcher shutdown gracefully");
            }
            Err(_) => log::warn!("Shutdown requested before the dispatcher started"),
        }
    });

    let polling = Polling::builder(bot);
    let polling = if config.drop_pending_updates {
        polling.drop_pending_updates()
    } else {
        polling
    };

    log::info!("Bot is running. Press Ctrl+C to stop.");

    dispatcher
        .try_dispatch_with_listener(
            polling.build(),
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await?;

    Ok(())
}
