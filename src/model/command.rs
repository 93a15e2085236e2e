//! Text commands understood by the bot.
//!
//! Commands are plain messages starting with the configured prefix, e.g.
//! `lum.log join #member-log` or `lum.clear edit`.

use thiserror::Error;

use crate::util::parse::parse_channel_reference;

/// Destination given to the `log` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelTarget {
    /// The channel the command was typed in.
    Here,
    /// An explicit channel mention or id.
    Channel(u64),
}

/// A parsed command.
///
/// Category names are kept as typed; the log configuration store decides whether
/// they are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ping,
    Help,
    Log {
        category: String,
        target: ChannelTarget,
    },
    Clear {
        category: String,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a channel mention, channel id or \"here\"")]
    InvalidChannel(String),
}

impl Command {
    /// Parses a message into a command.
    ///
    /// # Arguments
    /// - `prefix` - Command prefix, matched case-insensitively
    /// - `content` - Full message content
    ///
    /// # Returns
    /// - `None` - The message is not addressed to the bot
    /// - `Some(Ok(Command))` - Recognized command
    /// - `Some(Err(CommandParseError))` - Addressed to the bot but malformed
    pub fn parse(prefix: &str, content: &str) -> Option<Result<Self, CommandParseError>> {
        let content = content.trim_start();
        let head = content.get(..prefix.len())?;
        if !head.eq_ignore_ascii_case(prefix) {
            return None;
        }

        let mut args = content[prefix.len()..].split_whitespace();
        let name = args.next()?.to_lowercase();

        let command = match name.as_str() {
            "ping" => Ok(Self::Ping),
            "help" => Ok(Self::Help),
            "log" => Self::parse_log(args.next(), args.next()),
            "clear" => match args.next() {
                Some(category) => Ok(Self::Clear {
                    category: category.to_string(),
                }),
                None => Err(CommandParseError::MissingArgument("log type")),
            },
            _ => Err(CommandParseError::UnknownCommand(name)),
        };

        Some(command)
    }

    fn parse_log(
        category: Option<&str>,
        target: Option<&str>,
    ) -> Result<Self, CommandParseError> {
        let category = category.ok_or(CommandParseError::MissingArgument("log type"))?;
        let target = target.ok_or(CommandParseError::MissingArgument("channel"))?;

        let target = if target.eq_ignore_ascii_case("here") {
            ChannelTarget::Here
        } else {
            parse_channel_reference(target)
                .map(ChannelTarget::Channel)
                .ok_or_else(|| CommandParseError::InvalidChannel(target.to_string()))?
        };

        Ok(Self::Log {
            category: category.to_string(),
            target,
        })
    }
}

/// Usage text returned by the `help` command.
pub fn help_text(prefix: &str) -> String {
    format!(
        "`{p}ping` to check bot responsiveness\n\
         `{p}log <log type> <\"here\" or channel mention/id>` will change what channel a log appears in\n\
         `{p}clear <log type>` will disable a log\n\
         Log types: join, leave, delete, bulk_delete, edit, username, nickname, avatar, ljlog",
        p = prefix
    )
}
