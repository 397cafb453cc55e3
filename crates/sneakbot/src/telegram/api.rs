//! The slice of the Bot API the handlers talk to
//!
//! Handlers are generic over [`ChatApi`] so their failure policy can be
//! exercised with a fake that records calls and fails on demand.

use async_trait::async_trait;
use sneakcore::AppResult;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InlineKeyboardMarkup, MessageId};

#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Sends `text` with an inline keyboard attached.
    async fn send_launch_message(&self, chat_id: ChatId, text: &str, markup: InlineKeyboardMarkup)
        -> AppResult<MessageId>;

    /// Sends plain text.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<MessageId>;

    /// Calls answerCallbackQuery without any notification text.
    async fn answer_callback(&self, query_id: CallbackQueryId) -> AppResult<()>;
}

#[async_trait]
impl ChatApi for Bot {
    async fn send_launch_message(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: InlineKeyboardMarkup,
    ) -> AppResult<MessageId> {
        let msg = self.send_message(chat_id, text).reply_markup(markup).await?;
        Ok(msg.id)
    }

    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<MessageId> {
        let msg = self.send_message(chat_id, text).await?;
        Ok(msg.id)
    }

    async fn answer_callback(&self, query_id: CallbackQueryId) -> AppResult<()> {
        self.answer_callback_query(query_id).await?;
        Ok(())
    }
}
