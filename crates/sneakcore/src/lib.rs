//! SneakDog core - shared pieces of the bot and web processes
//!
//! # Module Structure
//!
//! - `config`: Immutable process configuration resolved from the environment
//! - `error`: Error taxonomy shared by both binaries
//! - `logging`: Logger and panic hook setup
//! - `signal`: Termination-signal future used for graceful shutdown

pub mod config;
pub mod error;
pub mod logging;
pub mod signal;

// Re-exports for convenience
pub use config::{BotConfig, LogConfig, WebConfig};
pub use error::{AppError, AppResult, ConfigError};
pub use logging::{init_logger, install_panic_hook};
pub use signal::shutdown_signal;
