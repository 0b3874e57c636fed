use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaifanError {
    #[error("Telegram error: {0}")]
    Telegram(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaifanError>;
