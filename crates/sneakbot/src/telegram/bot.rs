//! Bot initialization
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command list registration

use sneakcore::{AppResult, BotConfig};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "get the button that opens SneakDog")]
    Start,
}

/// Creates a Bot instance with custom or default API URL
///
/// The HTTP client keeps teloxide's defaults apart from the request timeout,
/// which must stay above the long-polling timeout.
///
/// # Arguments
/// * `config` - Bot configuration (token, API URL, request timeout)
///
/// # Returns
/// * `Ok(Bot)` - Bot instance; nothing has been sent yet
/// * `Err(AppError::Http)` - The HTTP client could not be built
pub fn create_bot(config: &BotConfig) -> AppResult<Bot> {
    let client = teloxide::net::default_reqwest_settings()
        .timeout(config.request_timeout)
        .build()?;
    let bot = Bot::with_client(config.token(), client);

    let bot = match &config.api_url {
        Some(url) => {
            log::info!("Using custom Bot API URL: {}", url);
            bot.set_api_url(url.clone())
        }
        None => bot,
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
///
/// # Arguments
/// * `bot` - Bot instance to configure
///
/// # Returns
/// * `Ok(())` - Commands set successfully
/// * `Err(RequestError)` - Failed to set commands
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}
