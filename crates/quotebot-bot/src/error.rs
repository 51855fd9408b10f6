use thiserror::Error;

use crate::config::ConfigError;

/// Binary-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("logger initialization failed: {0}")]
    Logger(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BotError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Logger(_) | Self::Io(_) => 10,
        }
    }
}
