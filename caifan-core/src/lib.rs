//! # caifan-core
//!
//! Core of the dish-tournament bot: the [`Session`] bracket state machine, the
//! [`Effect`] instructions it emits, the [`Messenger`] delivery seam, error
//! types, and tracing initialization. Transport-agnostic; used by caifan-telegram.

pub mod engine;
pub mod error;
pub mod logger;
pub mod messenger;
pub mod types;

pub use engine::{Session, MSG_NEXT_ROUND, MSG_NOT_ENOUGH, MSG_STARTED};
pub use error::{CaifanError, Result};
pub use logger::init_tracing;
pub use messenger::{deliver, Messenger};
pub use types::{Chat, Effect, Item};
