//! Delivery seam between the engine and a transport.
//!
//! [`Messenger`] is the abstraction the delivery layer implements (Telegram in
//! production; a recording mock in tests). [`deliver`] renders a sequence of
//! engine [`Effect`]s through it, in order.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::types::{Chat, Effect, Item};

/// Sends engine output to a chat. Implementations map to a transport.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends a plain text message.
    async fn send_text(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Presents a two-button choice between `a` and `b`.
    async fn present_choice(&self, chat: &Chat, a: &Item, b: &Item) -> Result<()>;
    /// Announces the tournament winner.
    async fn announce_winner(&self, chat: &Chat, winner: &Item) -> Result<()>;
}

/// Delivers `effects` to `chat` in emission order. Stops at the first
/// delivery failure; engine state has already been updated by then, so a
/// failed send never corrupts the bracket.
pub async fn deliver(messenger: &dyn Messenger, chat: &Chat, effects: &[Effect]) -> Result<()> {
    debug!(chat_id = chat.id, count = effects.len(), "delivering effects");
    for effect in effects {
        match effect {
            Effect::Notify(text) => messenger.send_text(chat, text).await?,
            Effect::PresentChoice(a, b) => messenger.present_choice(chat, a, b).await?,
            Effect::AnnounceWinner(winner) => messenger.announce_winner(chat, winner).await?,
        }
    }
    Ok(())
}
