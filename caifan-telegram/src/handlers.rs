//! Dispatcher endpoints: the /start command and choice-button callbacks.
//!
//! Each endpoint locks the chat's session entry, mutates the bracket, and
//! delivers the resulting effects while still holding the lock, so rapid
//! double presses in one chat are serialized.

use std::sync::Arc;

use caifan_core::{deliver, Chat as CoreChat};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info};

use crate::messenger::{decode_pick, TelegramMessenger};
use crate::sessions::SessionStore;

/// Shared dispatcher state: the session store and the dish catalog.
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub dishes: Vec<String>,
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Dish tournament commands:")]
pub enum Command {
    #[command(description = "start a new dish tournament")]
    Start,
}

/// Handles /start: seeds a fresh bracket for the chat, discarding any
/// tournament already in progress there.
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            let chat = CoreChat { id: msg.chat.id.0 };
            info!(chat_id = chat.id, "starting tournament");

            let entry = state.sessions.entry(chat.id).await;
            let mut guard = entry.lock().await;
            let effects = guard.session.begin(state.dishes.iter().cloned());
            guard.touch();

            let messenger = TelegramMessenger::new(bot);
            if let Err(e) = deliver(&messenger, &chat, &effects).await {
                error!(error = %e, chat_id = chat.id, "failed to deliver effects");
            }
        }
    }
    Ok(())
}

/// Handles a choice-button press: decodes the `pick|` payload, folds the
/// choice into the chat's bracket, and delivers the follow-up effects.
/// Unrecognized payloads and messages without chat context are ignored.
pub async fn callback_handler(
    bot: Bot,
    query: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    bot.answer_callback_query(query.id.clone()).await?;

    let Some(data) = query.data.as_deref() else {
        return Ok(());
    };
    let Some(chosen) = decode_pick(data) else {
        debug!(data, "unrecognized callback payload, ignoring");
        return Ok(());
    };
    let Some(chat_id) = query.message.as_ref().map(|m| m.chat().id.0) else {
        debug!(chosen, "callback without originating message, ignoring");
        return Ok(());
    };

    let chat = CoreChat { id: chat_id };
    info!(chat_id = chat.id, chosen, "pick received");

    let entry = state.sessions.entry(chat.id).await;
    let mut guard = entry.lock().await;
    let effects = guard.session.resolve_pick(chosen);
    guard.touch();

    if effects.is_empty() {
        debug!(chat_id = chat.id, chosen, "pick produced no effects");
        return Ok(());
    }

    let messenger = TelegramMessenger::new(bot);
    if let Err(e) = deliver(&messenger, &chat, &effects).await {
        error!(error = %e, chat_id = chat.id, "failed to deliver effects");
    }
    Ok(())
}
