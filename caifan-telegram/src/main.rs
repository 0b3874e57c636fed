//! Binary for the dish-tournament Telegram bot.

use anyhow::Result;
use caifan_telegram::{run, BotConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env()?;
    run(config).await
}
