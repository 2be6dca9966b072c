//! Errors returned by the command handlers. [`crate::run`] prints any of
//! them as `Error: ...` and exits with code `2`.

use holdem_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin, writing output or the hand-history file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The engine refused to continue (deck exhausted, game over, ...)
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),
}
