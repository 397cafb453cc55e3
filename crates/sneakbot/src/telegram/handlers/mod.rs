//! Telegram bot handler tree
//!
//! The dispatcher schema lives here together with the handler logic it
//! routes to. Handler logic is generic over [`ChatApi`](crate::telegram::api::ChatApi)
//! so integration tests can run it against a recording fake as well as
//! through the real schema with a mocked Bot API.

mod callbacks;
mod commands;
mod schema;
mod types;

pub use callbacks::handle_button_callback;
pub use commands::{
    handle_start_command, launch_keyboard, GENERIC_APOLOGY, MISSING_CONTEXT_APOLOGY, PLAY_BUTTON_TEXT, WELCOME_TEXT,
};
pub use schema::schema;
pub use types::{CallbackRequest, HandlerDeps, HandlerError, Requester, StartRequest};
