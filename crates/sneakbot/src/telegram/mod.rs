//! Telegram bot integration and handlers

pub mod api;
pub mod bot;
pub mod error_handler;
pub mod handlers;

// Re-exports for convenience
pub use api::ChatApi;
pub use bot::{create_bot, setup_bot_commands, Command};
pub use error_handler::{log_unhandled_update, UpdateError, UpdateErrorHandler, UpdateSummary};
pub use handlers::{schema, HandlerDeps, HandlerError};
