//! Wraps teloxide::Bot and implements [`caifan_core::Messenger`]. Production
//! code sends messages via Telegram; tests substitute another Messenger impl.
//! The callback payload encoding for choice buttons also lives here.

use async_trait::async_trait;
use caifan_core::{CaifanError, Chat, Item, Messenger, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup};

/// Callback payload prefix for a choice button.
pub const PICK_PREFIX: &str = "pick|";

/// Encodes an item into a choice button's callback payload.
/// Telegram caps callback data at 64 bytes, which bounds usable item names.
pub fn encode_pick(item: &str) -> String {
    format!("{PICK_PREFIX}{item}")
}

/// Decodes a callback payload back into the picked item, if it is one of ours.
pub fn decode_pick(data: &str) -> Option<&str> {
    data.strip_prefix(PICK_PREFIX)
}

/// Thin wrapper around teloxide::Bot that implements core's Messenger trait.
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    /// Creates a messenger from an existing teloxide Bot.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &Bot {
        &self.bot
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| CaifanError::Telegram(e.to_string()))?;
        Ok(())
    }

    async fn present_choice(&self, chat: &Chat, a: &Item, b: &Item) -> Result<()> {
        let keyboard = InlineKeyboardMarkup::new(vec![
            vec![InlineKeyboardButton::callback(a.clone(), encode_pick(a))],
            vec![InlineKeyboardButton::callback(b.clone(), encode_pick(b))],
        ]);
        self.bot
            .send_message(ChatId(chat.id), "Choose your favourite:")
            .reply_markup(keyboard)
            .await
            .map_err(|e| CaifanError::Telegram(e.to_string()))?;
        Ok(())
    }

    async fn announce_winner(&self, chat: &Chat, winner: &Item) -> Result<()> {
        self.send_text(chat, &format!("🏆 The winner is: {winner} 🎉"))
            .await
    }
}
