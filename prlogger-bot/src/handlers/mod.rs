//! Chat handlers: command parsing, the PR command dispatcher, message logging.

mod command;
mod logging_handler;
mod pr_command_handler;

pub use command::{
    usage_reply, CommandParts, PrCommand, DELETE_USAGE, HELP_TEXT, INVALID_WEIGHT,
    LEADERBOARD_USAGE, LOG_USAGE, WELCOME_TEXT,
};
pub use logging_handler::LoggingHandler;
pub use pr_command_handler::{format_leaderboard, PrCommandHandler, INDEX_MISSING, STORE_FAILURE};
