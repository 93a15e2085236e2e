//! Log embeds and posting.
//!
//! Builders in the submodules are pure functions from domain data to `CreateEmbed`;
//! `post_embed` sends one to a channel.

pub mod lumberjack;
pub mod member;
pub mod message;

use chrono::{DateTime, Duration, Utc};
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, Message};
use serenity::http::Http;

use crate::error::AppError;

/// Maximum length of an embed field value.
const FIELD_VALUE_LIMIT: usize = 1024;

/// Sends an embed to a channel.
///
/// # Returns
/// - `Ok(Message)` - The posted message
/// - `Err(AppError::DiscordErr)` - Channel missing or the bot cannot post there
pub async fn post_embed(
    http: &Http,
    channel_id: u64,
    embed: CreateEmbed,
) -> Result<Message, AppError> {
    let message = ChannelId::new(channel_id)
        .send_message(http, CreateMessage::new().embed(embed))
        .await?;

    Ok(message)
}

/// Formats a timestamp for embed descriptions.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %H:%M UTC").to_string()
}

/// Describes a duration in days, hours and minutes, leaving out zero units.
pub fn describe_duration(duration: Duration) -> String {
    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;

    let parts: Vec<String> = [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| {
            if value == 1 {
                format!("1 {}", unit)
            } else {
                format!("{} {}s", value, unit)
            }
        })
        .collect();

    if parts.is_empty() {
        "less than a minute".to_string()
    } else {
        parts.join(", ")
    }
}

/// Prepares text for an embed field value.
///
/// Empty text is replaced with a placeholder and long text is cut to the field limit.
pub fn field_value(text: &str) -> String {
    if text.trim().is_empty() {
        return "*empty*".to_string();
    }

    if text.chars().count() <= FIELD_VALUE_LIMIT {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(FIELD_VALUE_LIMIT - 3).collect();
    truncated.push_str("...");
    truncated
}
