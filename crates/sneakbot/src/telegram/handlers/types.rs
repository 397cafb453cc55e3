//! Handler types, dependencies, and request extraction

use std::sync::Arc;

use sneakcore::BotConfig;
use teloxide::types::{CallbackQuery, CallbackQueryId, ChatId, Message, UserId};

use crate::telegram::error_handler::UpdateError;

/// Error type for handlers
pub type HandlerError = UpdateError;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub config: Arc<BotConfig>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(config: Arc<BotConfig>) -> Self {
        Self { config }
    }
}

/// The user behind an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub id: UserId,
    pub username: Option<String>,
}

/// A /start invocation reduced to what the handler needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    pub chat_id: ChatId,
    /// Missing for channel posts and anonymous group admins
    pub user: Option<Requester>,
}

impl StartRequest {
    /// Extract the request from a Telegram message
    pub fn from_message(msg: &Message) -> Self {
        Self {
            chat_id: msg.chat.id,
            user: msg.from.as_ref().map(|u| Requester {
                id: u.id,
                username: u.username.clone(),
            }),
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// A button press waiting for acknowledgment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackRequest {
    pub query_id: CallbackQueryId,
    pub user_id: UserId,
    pub data: Option<String>,
}

impl CallbackRequest {
    pub fn from_query(q: &CallbackQuery) -> Self {
        Self {
            query_id: q.id.clone(),
            user_id: q.from.id,
            data: q.data.clone(),
        }
    }
}
