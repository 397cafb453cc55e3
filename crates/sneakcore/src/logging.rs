//! Logger initialization
//!
//! Console output goes to stdout; an optional log file receives the same
//! records. Chatty HTTP internals are filtered out so the bot's own lines
//! stay readable.

use std::fs::OpenOptions;

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

use crate::config::LogConfig;
use crate::error::AppResult;

/// Targets that log every connection at debug level
const NOISY_TARGETS: [&str; 4] = ["hyper", "reqwest", "h2", "rustls"];

fn logger_config() -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_rfc3339()
        .set_target_level(simplelog::LevelFilter::Error)
        .set_thread_level(simplelog::LevelFilter::Off);
    for target in NOISY_TARGETS {
        builder.add_filter_ignore_str(target);
    }
    builder.build()
}

/// Builds the console logger plus the file logger when a path is configured.
///
/// The file is opened in append mode so restarts keep earlier records.
pub fn build_loggers(config: &LogConfig) -> AppResult<Vec<Box<dyn SharedLogger>>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.level,
        logger_config(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    )];

    if let Some(path) = &config.file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        loggers.push(WriteLogger::new(config.level, logger_config(), file));
    }

    Ok(loggers)
}

/// Initialize logger for console and, when configured, file output
///
/// # Arguments
/// * `config` - Level and optional log file path
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(AppError::Io)` - The log file could not be opened
/// * `Err(AppError::Logger)` - A global logger is already set
pub fn init_logger(config: &LogConfig) -> AppResult<()> {
    CombinedLogger::init(build_loggers(config)?)?;
    log::debug!("Logger initialized at level {}", config.level);
    Ok(())
}

/// Routes panics through the logger so they land in the log file too.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        } else if let Some(msg) = panic_info.payload().downcast_ref::<String>() {
            log::error!("Panic message: {}", msg);
        } else {
            log::error!("Panic caught: {}", panic_info);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;
    use tempfile::tempdir;

    #[test]
    fn test_console_only_by_default() {
        let loggers = build_loggers(&LogConfig::default()).unwrap();
        assert_eq!(loggers.len(), 1);
    }

    #[test]
    fn test_file_logger_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sneakdog.log");
        let config = LogConfig {
            level: LevelFilter::Debug,
            file: Some(path.clone()),
        };

        let loggers = build_loggers(&config).unwrap();
        assert_eq!(loggers.len(), 2);
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let dir = tempdir().unwrap();
        let config = LogConfig {
            level: LevelFilter::Info,
            file: Some(dir.path().join("missing").join("sneakdog.log")),
        };

        assert!(build_loggers(&config).is_err());
    }
}
