//! Process-level error boundary for the dispatcher
//!
//! Handlers recover from their own failures. Whatever still escapes is
//! wrapped in [`UpdateError`] together with a summary of the update, so the
//! log line names both the error and the update that caused it.

use std::fmt;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use sneakcore::AppError;
use teloxide::error_handlers::ErrorHandler;
use teloxide::types::{ChatId, Update, UpdateKind, UserId};
use thiserror::Error;

/// The identifying bits of an update, kept for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub id: u32,
    pub kind: &'static str,
    pub chat_id: Option<ChatId>,
    pub user_id: Option<UserId>,
}

impl UpdateSummary {
    pub fn from_update(update: &Update) -> Self {
        Self {
            id: update.id.0,
            kind: kind_name(&update.kind),
            chat_id: update.chat().map(|chat| chat.id),
            user_id: update.from().map(|user| user.id),
        }
    }
}

impl fmt::Display for UpdateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "update {} ({}", self.id, self.kind)?;
        if let Some(chat_id) = self.chat_id {
            write!(f, ", chat {}", chat_id)?;
        }
        if let Some(user_id) = self.user_id {
            write!(f, ", user {}", user_id)?;
        }
        write!(f, ")")
    }
}

fn kind_name(kind: &UpdateKind) -> &'static str {
    match kind {
        UpdateKind::Message(_) => "message",
        UpdateKind::EditedMessage(_) => "edited_message",
        UpdateKind::CallbackQuery(_) => "callback_query",
        UpdateKind::InlineQuery(_) => "inline_query",
        UpdateKind::MyChatMember(_) => "my_chat_member",
        _ => "other",
    }
}

/// An error that escaped a handler
#[derive(Error, Debug)]
#[error("{update}: {source}")]
pub struct UpdateError {
    pub update: UpdateSummary,
    #[source]
    pub source: AppError,
}

impl UpdateError {
    pub fn new(update: &Update, source: impl Into<AppError>) -> Self {
        Self {
            update: UpdateSummary::from_update(update),
            source: source.into(),
        }
    }
}

/// Logs dispatcher errors; takes no corrective action
#[derive(Debug, Default)]
pub struct UpdateErrorHandler;

impl UpdateErrorHandler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }
}

impl ErrorHandler<UpdateError> for UpdateErrorHandler {
    fn handle_error(self: Arc<Self>, error: UpdateError) -> BoxFuture<'static, ()> {
        log::error!("Unhandled error while processing {}: {:?}", error.update, error.source);
        Box::pin(async {})
    }
}

/// Fallback for updates no branch of the schema accepted
pub async fn log_unhandled_update(update: Arc<Update>) {
    log::debug!("Ignoring {}", UpdateSummary::from_update(&update));
}
