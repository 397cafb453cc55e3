//! /start: greet the user and hand out the game launch button

use sneakcore::{AppError, AppResult};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MessageId, WebAppInfo};
use url::Url;

use super::types::StartRequest;
use crate::telegram::api::ChatApi;

pub const WELCOME_TEXT: &str =
    "🐕 Welcome to SneakDog! 🎮\n\nReady to catch that sneaky dog?\nClick the button below to start playing!";

pub const PLAY_BUTTON_TEXT: &str = "🎮 Play SneakDog!";

/// Sent when the update has no user to greet
pub const MISSING_CONTEXT_APOLOGY: &str = "Sorry, something went wrong. Please try again!";

/// Sent for every other failure
pub const GENERIC_APOLOGY: &str = "An unexpected error occurred. Please try again!";

/// Single-button keyboard that opens `launch_url` as a Mini App
pub fn launch_keyboard(launch_url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
        PLAY_BUTTON_TEXT,
        WebAppInfo {
            url: launch_url.clone(),
        },
    )]])
}

async fn send_welcome<A>(api: &A, request: &StartRequest, launch_url: &Url) -> AppResult<MessageId>
where
    A: ChatApi + ?Sized,
{
    let user = request.user.as_ref().ok_or(AppError::MissingUser)?;
    log::info!(
        "User {} (@{}) started the bot in chat {}",
        user.id,
        user.username.as_deref().unwrap_or("-"),
        request.chat_id
    );

    api.send_launch_message(request.chat_id, WELCOME_TEXT, launch_keyboard(launch_url))
        .await
}

/// Handles /start.
///
/// Any failure is logged and answered with a plain-text apology in the same
/// chat. Only a failure to deliver that apology is returned.
///
/// # Arguments
/// * `api` - Bot API to send through
/// * `request` - Chat and sender of the command
/// * `launch_url` - Page opened by the button
pub async fn handle_start_command<A>(api: &A, request: &StartRequest, launch_url: &Url) -> AppResult<()>
where
    A: ChatApi + ?Sized,
{
    let err = match send_welcome(api, request, launch_url).await {
        Ok(message_id) => {
            log::info!("Launch button sent to chat {} (message {})", request.chat_id, message_id.0);
            return Ok(());
        }
        Err(e) => e,
    };

    log::error!(
        "Failed to handle /start in chat {} for user {:?}: {:?}",
        request.chat_id,
        request.user_id(),
        err
    );

    let apology = if err.is_missing_context() {
        MISSING_CONTEXT_APOLOGY
    } else {
        GENERIC_APOLOGY
    };
    api.send_text(request.chat_id, apology).await?;

    Ok(())
}
