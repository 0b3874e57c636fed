//! # caifan-telegram
//!
//! Telegram delivery layer for the dish-tournament bot: teloxide messenger
//! implementing [`caifan_core::Messenger`], env config, the per-chat session
//! store with TTL eviction, and the long-polling dispatcher. Handles only
//! Telegram connectivity; all bracket logic lives in caifan-core.

mod catalog;
mod config;
mod handlers;
mod messenger;
mod runner;
mod sessions;

pub use catalog::{default_dishes, DISHES};
pub use config::BotConfig;
pub use handlers::Command;
pub use messenger::{decode_pick, encode_pick, TelegramMessenger, PICK_PREFIX};
pub use runner::run;
pub use sessions::{spawn_sweeper, SessionEntry, SessionStore};
