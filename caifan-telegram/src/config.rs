//! Minimal bot config: token, optional log file, dish catalog, session TTL.
//! Loaded from env: BOT_TOKEN, LOG_FILE, DISHES, SESSION_TTL_SECS.

use std::env;
use std::time::Duration;

use anyhow::Result;

use crate::catalog::default_dishes;

const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

/// Bot configuration (Telegram connectivity, catalog, and session policy).
pub struct BotConfig {
    pub bot_token: String,
    pub log_file: Option<String>,
    pub dishes: Vec<String>,
    pub session_ttl: Duration,
}

impl BotConfig {
    /// Loads from env: BOT_TOKEN required; LOG_FILE, DISHES (comma-separated),
    /// and SESSION_TTL_SECS optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let log_file = env::var("LOG_FILE").ok();
        let dishes = match env::var("DISHES") {
            Ok(raw) => {
                let dishes = parse_dishes(&raw);
                if dishes.is_empty() {
                    anyhow::bail!("DISHES is set but contains no dish names");
                }
                dishes
            }
            Err(_) => default_dishes(),
        };
        let session_ttl = match env::var("SESSION_TTL_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .map_err(|_| anyhow::anyhow!("SESSION_TTL_SECS is not a number: {}", raw))?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        };
        Ok(Self {
            bot_token,
            log_file,
            dishes,
            session_ttl,
        })
    }

    /// Builds config with the given token; catalog and TTL take defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            log_file: None,
            dishes: default_dishes(),
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

/// Splits a comma-separated catalog override, trimming and dropping empties.
fn parse_dishes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: with_token sets bot_token; catalog and TTL take defaults.**
    #[test]
    fn test_with_token() {
        let config = BotConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.log_file.is_none());
        assert_eq!(config.dishes.len(), 16);
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
    }

    /// **Test: parse_dishes trims whitespace and drops empty segments.**
    #[test]
    fn test_parse_dishes() {
        assert_eq!(
            parse_dishes("Pizza, Sushi ,,Ramen"),
            vec!["Pizza", "Sushi", "Ramen"]
        );
        assert!(parse_dishes("").is_empty());
        assert!(parse_dishes(" , ,").is_empty());
    }
}
