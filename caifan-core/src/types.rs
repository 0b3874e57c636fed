//! Core types: tournament items, chat identity, and the effects the engine emits.

use serde::{Deserialize, Serialize};

/// A named tournament entrant. The display name doubles as the identifier.
pub type Item = String;

/// Chat (conversation) identity. One bracket session exists per chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// An output instruction the engine asks its delivery layer to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Plain text notification (round transitions, restart hints).
    Notify(String),
    /// Present an interactive two-button choice between the two items.
    PresentChoice(Item, Item),
    /// The tournament is over; announce the winning item.
    AnnounceWinner(Item),
}
