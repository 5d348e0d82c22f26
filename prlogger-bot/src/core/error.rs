//! Error types for the bot core.

use thiserror::Error;

/// Error raised by the handler chain. Storage and argument errors are answered in chat, so only
/// transport failures reach here.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Errors produced while interpreting a chat command.
#[derive(Error, Debug, PartialEq)]
pub enum HandlerError {
    #[error("Not a command")]
    NotACommand,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for /{0}")]
    MissingArgument(&'static str),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
