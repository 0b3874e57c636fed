//! Long-polling runner: builds the teloxide Bot, session store, and sweeper
//! once at startup, then dispatches messages and callback queries.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use caifan_core::init_tracing;
use teloxide::{dptree, prelude::*};
use tracing::info;

use crate::config::BotConfig;
use crate::handlers::{callback_handler, command_handler, AppState, Command};
use crate::sessions::{spawn_sweeper, SessionStore};

const SWEEP_PERIOD: Duration = Duration::from_secs(60);

/// Main entry: init logging, build the bot and session store, start the
/// eviction sweeper, then run the dispatcher until shutdown.
pub async fn run(config: BotConfig) -> Result<()> {
    init_tracing(config.log_file.as_deref())?;

    let bot = Bot::new(config.bot_token.clone());
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "bot identity");
    }

    let sessions = Arc::new(SessionStore::new(config.session_ttl));
    spawn_sweeper(sessions.clone(), SWEEP_PERIOD);

    let state = Arc::new(AppState {
        sessions,
        dishes: config.dishes.clone(),
    });

    info!(
        dishes = state.dishes.len(),
        session_ttl_secs = config.session_ttl.as_secs(),
        "starting dispatcher with long polling"
    );

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            tracing::debug!(update = ?upd, "unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
