//! Process configuration
//!
//! Every setting is resolved once at startup into an immutable value that is
//! passed down explicitly. Handlers never read the environment themselves.
//!
//! Each config type offers `from_env()` for the binaries and `from_lookup()`
//! which takes any `Fn(&str) -> Option<String>`, so tests can feed a map
//! instead of mutating the process environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::ConfigError;

/// Environment variable names
pub mod keys {
    pub const BOT_TOKEN: &str = "BOT_TOKEN";
    pub const TELOXIDE_TOKEN: &str = "TELOXIDE_TOKEN";
    pub const WEBAPP_URL: &str = "WEBAPP_URL";
    pub const BOT_API_URL: &str = "BOT_API_URL";
    pub const BOT_REQUEST_TIMEOUT_SECS: &str = "BOT_REQUEST_TIMEOUT_SECS";
    pub const DROP_PENDING_UPDATES: &str = "DROP_PENDING_UPDATES";
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const GAME_PAGE_PATH: &str = "GAME_PAGE_PATH";
    pub const STATIC_DIR: &str = "STATIC_DIR";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const LOG_FILE_PATH: &str = "LOG_FILE_PATH";
}

/// Hosted game page opened by the launch button
pub const DEFAULT_LAUNCH_URL: &str = "https://maximumkingz.github.io/SneakDog/templates/game.html";

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    /// Must stay above the long-polling timeout teloxide uses for getUpdates
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Web server configuration
pub mod web {
    /// Listening port when PORT is unset
    pub const PORT: u16 = 8000;

    /// Game page looked up relative to the working directory
    pub const GAME_PAGE_PATH: &str = "templates/game.html";

    /// Directory served under /static
    pub const STATIC_DIR: &str = "static";
}

/// Bot process configuration
#[derive(Debug)]
pub struct BotConfig {
    token: SecretString,
    /// URL opened in the embedded web view
    pub launch_url: Url,
    /// Custom (e.g. local) Bot API server
    pub api_url: Option<Url>,
    pub request_timeout: Duration,
    /// Skip updates that queued up while the bot was offline
    pub drop_pending_updates: bool,
}

impl BotConfig {
    /// Builds a config with defaults for everything but the token and URL.
    pub fn new(token: impl Into<String>, launch_url: Url) -> Self {
        Self {
            token: SecretString::from(token.into()),
            launch_url,
            api_url: None,
            request_timeout: network::timeout(),
            drop_pending_updates: true,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = read(&lookup, keys::BOT_TOKEN)
            .or_else(|| read(&lookup, keys::TELOXIDE_TOKEN))
            .ok_or(ConfigError::MissingToken)?;

        let launch_url = match read(&lookup, keys::WEBAPP_URL) {
            Some(value) => parse_launch_url(&value)?,
            None => parse_launch_url(DEFAULT_LAUNCH_URL)?,
        };

        let api_url = match read(&lookup, keys::BOT_API_URL) {
            Some(value) => Some(Url::parse(&value).map_err(|source| ConfigError::InvalidApiUrl { value, source })?),
            None => None,
        };

        let request_timeout = match read(&lookup, keys::BOT_REQUEST_TIMEOUT_SECS) {
            Some(value) => Duration::from_secs(parse_number(keys::BOT_REQUEST_TIMEOUT_SECS, &value)?),
            None => network::timeout(),
        };

        let drop_pending_updates = match read(&lookup, keys::DROP_PENDING_UPDATES) {
            Some(value) => parse_bool(keys::DROP_PENDING_UPDATES, &value)?,
            None => true,
        };

        Ok(Self {
            token: SecretString::from(token),
            launch_url,
            api_url,
            request_timeout,
            drop_pending_updates,
        })
    }

    /// The bot token. Only the Bot constructor should call this.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

/// Web process configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Explicitly configured game page file
    pub game_page: Option<PathBuf>,
    pub static_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: web::PORT,
            game_page: None,
            static_dir: PathBuf::from(web::STATIC_DIR),
        }
    }
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match read(&lookup, keys::HOST) {
            Some(value) => IpAddr::from_str(&value).map_err(|_| ConfigError::InvalidHost { key: keys::HOST, value })?,
            None => defaults.host,
        };
        let port = match read(&lookup, keys::PORT) {
            Some(value) => parse_number(keys::PORT, &value)?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            game_page: read(&lookup, keys::GAME_PAGE_PATH).map(PathBuf::from),
            static_dir: read(&lookup, keys::STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    /// Overrides the port (CLI flag wins over PORT)
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Additional log file; console only when unset
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = match read(&lookup, keys::LOG_LEVEL) {
            Some(value) => LevelFilter::from_str(&value).map_err(|_| ConfigError::InvalidLogLevel(value))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            level,
            file: read(&lookup, keys::LOG_FILE_PATH).map(PathBuf::from),
        })
    }
}

/// Reads a key, treating blank values as unset.
fn read<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_launch_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidLaunchUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    // Telegram refuses web_app buttons with anything but https
    if url.scheme() != "https" {
        return Err(ConfigError::InvalidLaunchUrl {
            value: value.to_string(),
            reason: format!("scheme must be https, got {}", url.scheme()),
        });
    }

    Ok(url)
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
