//! Chat command parsing: `/name[@bot] args...` into [`PrCommand`].

use crate::core::HandlerError;

pub const WELCOME_TEXT: &str =
    "Welcome to PRLogger! Use /log to log a PR, or /view to see your PRs.";

pub const HELP_TEXT: &str = "Commands:\n\
/log <exercise> <weight> - log a PR (kg)\n\
/delete <exercise> - delete your latest PR for an exercise\n\
/view - list your PRs\n\
/leaderboard <exercise> - top 10 lifts for an exercise";

pub const LOG_USAGE: &str = "Usage: /log <exercise> <weight>";
pub const DELETE_USAGE: &str = "Usage: /delete <exercise>";
pub const LEADERBOARD_USAGE: &str = "Usage: /leaderboard <exercise>";
pub const INVALID_WEIGHT: &str = "Weight must be a number, e.g. /log bench 60";

#[derive(Debug, Clone, PartialEq)]
pub enum PrCommand {
    Start,
    Help,
    Log { exercise: String, weight: f64 },
    Delete { exercise: String },
    View,
    Leaderboard { exercise: String },
}

/// A command split into its name, optional `@bot` mention, and whitespace-separated arguments.
#[derive(Debug, PartialEq)]
pub struct CommandParts<'a> {
    pub name: &'a str,
    pub mention: Option<&'a str>,
    pub args: Vec<&'a str>,
}

impl<'a> CommandParts<'a> {
    /// Returns `None` for text that is not a command.
    pub fn split(text: &'a str) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let head = tokens.next()?.strip_prefix('/')?;
        if head.is_empty() {
            return None;
        }
        let (name, mention) = match head.split_once('@') {
            Some((name, bot)) => (name, Some(bot)),
            None => (head, None),
        };
        Some(Self {
            name,
            mention,
            args: tokens.collect(),
        })
    }

    /// True if the command names no bot or names `bot_username` (case-insensitive).
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (self.mention, bot_username) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(mention), Some(me)) => mention.eq_ignore_ascii_case(me),
        }
    }
}

impl PrCommand {
    /// `/log` needs exactly two arguments; `/delete` and `/leaderboard` exactly one.
    pub fn from_parts(parts: &CommandParts<'_>) -> Result<Self, HandlerError> {
        let name = parts.name.to_ascii_lowercase();
        match (name.as_str(), parts.args.as_slice()) {
            ("start", _) => Ok(Self::Start),
            ("help", _) => Ok(Self::Help),
            ("view", _) => Ok(Self::View),
            ("log", [exercise, weight]) => Ok(Self::Log {
                exercise: exercise.to_string(),
                weight: parse_weight(weight)?,
            }),
            ("log", _) => Err(HandlerError::MissingArgument("log")),
            ("delete", [exercise]) => Ok(Self::Delete {
                exercise: exercise.to_string(),
            }),
            ("delete", _) => Err(HandlerError::MissingArgument("delete")),
            ("leaderboard", [exercise]) => Ok(Self::Leaderboard {
                exercise: exercise.to_string(),
            }),
            ("leaderboard", _) => Err(HandlerError::MissingArgument("leaderboard")),
            _ => Err(HandlerError::UnknownCommand(parts.name.to_string())),
        }
    }

    pub fn parse(text: &str) -> Result<Self, HandlerError> {
        let parts = CommandParts::split(text).ok_or(HandlerError::NotACommand)?;
        Self::from_parts(&parts)
    }
}

/// Accepts `60`, `62.5`, `62,5` and an optional `kg` suffix. No range checks.
fn parse_weight(raw: &str) -> Result<f64, HandlerError> {
    let lower = raw.to_ascii_lowercase();
    let trimmed = lower.strip_suffix("kg").unwrap_or(&lower).replace(',', ".");
    match trimmed.parse::<f64>() {
        Ok(w) if w.is_finite() => Ok(w),
        _ => Err(HandlerError::InvalidWeight(raw.to_string())),
    }
}

/// Fixed reply for an argument error.
pub fn usage_reply(err: &HandlerError) -> &'static str {
    match err {
        HandlerError::MissingArgument("delete") => DELETE_USAGE,
        HandlerError::MissingArgument("leaderboard") => LEADERBOARD_USAGE,
        HandlerError::InvalidWeight(_) => INVALID_WEIGHT,
        _ => LOG_USAGE,
    }
}
