//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::callbacks::handle_button_callback;
use super::commands::handle_start_command;
use super::types::{CallbackRequest, HandlerDeps, HandlerError, StartRequest};
use crate::telegram::bot::Command;
use crate::telegram::error_handler::UpdateError;

/// Creates the dispatcher schema for the bot.
///
/// The same tree runs in production and in the integration tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(callback_handler())
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, update: Update, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => {
                        let request = StartRequest::from_message(&msg);
                        handle_start_command(&bot, &request, &deps.config.launch_url)
                            .await
                            .map_err(|e| UpdateError::new(&update, e))
                    }
                }
            }
        },
    ))
}

fn callback_handler() -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(|bot: Bot, q: CallbackQuery| async move {
        handle_button_callback(&bot, CallbackRequest::from_query(&q)).await;
        Ok::<(), HandlerError>(())
    })
}
