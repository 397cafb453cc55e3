use thiserror::Error;

/// Errors raised while resolving configuration at startup.
///
/// All of them are fatal: the process logs the error and exits with status 1
/// before touching the network.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither BOT_TOKEN nor TELOXIDE_TOKEN carries a non-blank value
    #[error("bot token is not set (expected BOT_TOKEN or TELOXIDE_TOKEN)")]
    MissingToken,

    /// Launch URL does not parse or is not an https URL
    #[error("invalid launch URL {value:?}: {reason}")]
    InvalidLaunchUrl { value: String, reason: String },

    /// Custom Bot API URL does not parse
    #[error("invalid Bot API URL {value:?}: {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key} must be an IP address, got {value:?}")]
    InvalidHost { key: &'static str, value: String },

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

/// Centralized error type for both processes
///
/// Handler logic returns `AppResult`; the dispatcher boundary decides what the
/// user sees and what only goes to the log.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// HTTP client construction errors
    #[cfg(feature = "telegram")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger was already installed
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// The update has no sender to greet
    #[error("Update carries no user")]
    MissingUser,

    /// Anyhow errors (for general error handling)
    #[error("Application error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl AppError {
    /// True when the failure comes from missing update context rather than
    /// from talking to Telegram.
    pub fn is_missing_context(&self) -> bool {
        matches!(self, AppError::MissingUser)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
