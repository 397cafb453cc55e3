//! Recording fake for the Bot API seam
//!
//! Records every call in order and fails selected operations on demand.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use sneakbot::telegram::ChatApi;
use sneakcore::{AppError, AppResult};
use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardMarkup, MessageId};
use teloxide::{ApiError, RequestError};

#[derive(Debug, Clone)]
pub enum ChatCall {
    LaunchMessage {
        chat_id: ChatId,
        text: String,
        markup: InlineKeyboardMarkup,
    },
    Text {
        chat_id: ChatId,
        text: String,
    },
    AnswerCallback(CallbackQueryId),
}

#[derive(Default)]
pub struct RecordingChat {
    calls: Mutex<Vec<ChatCall>>,
    fail_launch: AtomicBool,
    fail_text: AtomicBool,
    fail_answer: AtomicBool,
}

fn blocked() -> AppError {
    AppError::Telegram(RequestError::Api(ApiError::BotBlocked))
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_launch(self) -> Self {
        self.fail_launch.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_text(self) -> Self {
        self.fail_text.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_answer(self) -> Self {
        self.fail_answer.store(true, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> Vec<ChatCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of plain messages sent so far
    pub fn texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ChatCall::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ChatCall) -> MessageId {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        MessageId(calls.len() as i32)
    }
}

#[async_trait]
impl ChatApi for RecordingChat {
    async fn send_launch_message(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: InlineKeyboardMarkup,
    ) -> AppResult<MessageId> {
        let id = self.record(ChatCall::LaunchMessage {
            chat_id,
            text: text.to_string(),
            markup,
        });
        if self.fail_launch.load(Ordering::SeqCst) {
            return Err(blocked());
        }
        Ok(id)
    }

    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<MessageId> {
        let id = self.record(ChatCall::Text {
            chat_id,
            text: text.to_string(),
        });
        if self.fail_text.load(Ordering::SeqCst) {
            return Err(blocked());
        }
        Ok(id)
    }

    async fn answer_callback(&self, query_id: CallbackQueryId) -> AppResult<()> {
        self.record(ChatCall::AnswerCallback(query_id));
        if self.fail_answer.load(Ordering::SeqCst) {
            return Err(blocked());
        }
        Ok(())
    }
}
