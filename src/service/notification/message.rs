//! Embeds for message deletions and edits.

use serenity::all::{CreateEmbed, CreateEmbedAuthor, Timestamp};

use super::field_value;

const DELETE_COLOR: u32 = 0xD90000;
const EDIT_COLOR: u32 = 0x1E90FF;

/// A message's author and content as last seen by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedMessage {
    pub author_id: u64,
    pub author_tag: String,
    pub content: String,
}

/// Builds the single message delete embed.
///
/// Content is only available when the message was in the cache.
pub fn message_deleted(
    channel_id: u64,
    message_id: u64,
    cached: Option<&LoggedMessage>,
) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("**Message Deleted**")
        .color(DELETE_COLOR)
        .timestamp(Timestamp::now());

    match cached {
        Some(message) => embed
            .author(CreateEmbedAuthor::new(format!(
                "{} ({})",
                message.author_tag, message.author_id
            )))
            .description(format!(
                "**Author:** <@{}>\n**Channel:** <#{}>\n**Message ID:** {}",
                message.author_id, channel_id, message_id
            ))
            .field("**Content**", field_value(&message.content), false),
        None => embed.description(format!(
            "**Channel:** <#{}>\n**Message ID:** {}\nMessage was not cached, content unavailable.",
            channel_id, message_id
        )),
    }
}

/// Builds the bulk delete embed.
pub fn messages_bulk_deleted(channel_id: u64, count: usize) -> CreateEmbed {
    CreateEmbed::new()
        .title("**Bulk Message Delete**")
        .color(DELETE_COLOR)
        .description(format!(
            "**{}** messages were deleted in <#{}>",
            count, channel_id
        ))
        .timestamp(Timestamp::now())
}

/// Builds the message edit embed.
///
/// # Arguments
/// - `guild_id` - Guild of the message, used for the jump link
/// - `channel_id` - Channel of the message
/// - `message_id` - Edited message
/// - `author` - Author and new content
/// - `before` - Previous content, when the old message was cached
pub fn message_edited(
    guild_id: u64,
    channel_id: u64,
    message_id: u64,
    author: &LoggedMessage,
    before: Option<&str>,
) -> CreateEmbed {
    CreateEmbed::new()
        .title("**Message Edited**")
        .color(EDIT_COLOR)
        .author(CreateEmbedAuthor::new(format!(
            "{} ({})",
            author.author_tag, author.author_id
        )))
        .description(format!(
            "**Author:** <@{}>\n**Channel:** <#{}>\n[Jump to message](https://discord.com/channels/{}/{}/{})",
            author.author_id, channel_id, guild_id, channel_id, message_id
        ))
        .field(
            "**Before**",
            before
                .map(field_value)
                .unwrap_or_else(|| "*not cached*".to_string()),
            false,
        )
        .field("**After**", field_value(&author.content), false)
        .timestamp(Timestamp::now())
}
