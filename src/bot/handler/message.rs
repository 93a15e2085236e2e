//! Message event handlers.
//!
//! New messages are checked for commands. Deletes, bulk deletes and edits are posted
//! to their log channels, skipping bot authors and the guild's own ljlog channel. Every
//! single message delete also runs the lumberjack retention sweep.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Context, GuildId, Message, MessageId, MessageUpdateEvent};

use crate::{
    error::AppError,
    model::{command::Command, guild_log::{GuildLogConfig, LogCategory}},
    service::{
        log_config::LogConfigService,
        notification::{
            message::{self as embeds, LoggedMessage},
            post_embed,
        },
        retention::MessageRetentionService,
    },
};

use super::{command::run_command, post_log};

/// Handle message creation in a channel
pub async fn handle_message(
    db: &DatabaseConnection,
    prefix: &str,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    // Commands are only accepted in guild channels (not DMs)
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let Some(parsed) = Command::parse(prefix, &message.content) else {
        return;
    };

    match parsed {
        Ok(command) => {
            if let Err(e) =
                run_command(db, prefix, &ctx, &message, guild_id.get(), command).await
            {
                tracing::error!(
                    "Failed to run command in channel {}: {:?}",
                    message.channel_id,
                    e
                );
            }
        }
        Err(e) => {
            let reply = format!("{}. See `{}help` for usage", e, prefix);
            if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
                tracing::error!(
                    "Failed to reply to command in channel {}: {}",
                    message.channel_id,
                    e
                );
            }
        }
    }
}

/// Handle a single message deletion, then sweep expired lumberjack messages
pub async fn handle_message_delete(
    db: &DatabaseConnection,
    ctx: Context,
    channel_id: ChannelId,
    deleted_message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    if let Some(guild_id) = guild_id {
        log_message_delete(db, &ctx, guild_id.get(), channel_id, deleted_message_id).await;
    }

    match MessageRetentionService::new(db, &*ctx.http)
        .sweep(Utc::now())
        .await
    {
        Ok(report) if report.total() > 0 => {
            tracing::info!("Removed {} expired lumberjack messages", report.total());
        }
        Ok(_) => {}
        Err(e) => tracing::error!("Failed to sweep lumberjack messages: {:?}", e),
    }
}

async fn log_message_delete(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_id: u64,
    channel_id: ChannelId,
    message_id: MessageId,
) {
    let Some(config) = guild_config(db, guild_id).await else {
        return;
    };
    let Some(log_channel) = config.channel(LogCategory::Delete) else {
        return;
    };
    if is_lumberjack_channel(&config, channel_id) {
        return;
    }

    // Extract cached data immediately so no cache reference is held across an await
    let cached = ctx.cache.message(channel_id, message_id).map(|message| {
        (
            message.author.bot,
            LoggedMessage {
                author_id: message.author.id.get(),
                author_tag: message.author.tag(),
                content: message.content.clone(),
            },
        )
    });

    if matches!(cached, Some((true, _))) {
        return;
    }

    let embed = embeds::message_deleted(
        channel_id.get(),
        message_id.get(),
        cached.as_ref().map(|(_, message)| message),
    );

    if let Err(e) = post_embed(&ctx.http, log_channel, embed).await {
        tracing::error!(
            "Failed to post delete log to channel {} in guild {}: {}",
            log_channel,
            guild_id,
            e
        );
    }
}

/// Handle several messages being deleted at once
pub async fn handle_message_delete_bulk(
    db: &DatabaseConnection,
    ctx: Context,
    channel_id: ChannelId,
    multiple_deleted_messages_ids: Vec<MessageId>,
    guild_id: Option<GuildId>,
) {
    let Some(guild_id) = guild_id else {
        return;
    };
    let guild_id = guild_id.get();

    let Some(config) = guild_config(db, guild_id).await else {
        return;
    };
    let Some(log_channel) = config.channel(LogCategory::BulkDelete) else {
        return;
    };
    if is_lumberjack_channel(&config, channel_id) {
        return;
    }

    let embed =
        embeds::messages_bulk_deleted(channel_id.get(), multiple_deleted_messages_ids.len());

    if let Err(e) = post_embed(&ctx.http, log_channel, embed).await {
        tracing::error!(
            "Failed to post bulk delete log to channel {} in guild {}: {}",
            log_channel,
            guild_id,
            e
        );
    }
}

/// Handle a message edit
///
/// Updates without new content (such as link embeds resolving) are ignored.
pub async fn handle_message_update(
    db: &DatabaseConnection,
    ctx: Context,
    old_if_available: Option<Message>,
    new: Option<Message>,
    event: MessageUpdateEvent,
) {
    let Some(guild_id) = event.guild_id else {
        return;
    };
    let Some(content) = event.content else {
        return;
    };
    let Some(author) = event.author.or_else(|| new.map(|message| message.author)) else {
        return;
    };
    if author.bot {
        return;
    }

    let before = old_if_available.map(|message| message.content);
    if before.as_deref() == Some(content.as_str()) {
        return;
    }

    let logged = LoggedMessage {
        author_id: author.id.get(),
        author_tag: author.tag(),
        content,
    };
    let embed = embeds::message_edited(
        guild_id.get(),
        event.channel_id.get(),
        event.id.get(),
        &logged,
        before.as_deref(),
    );

    post_log(db, &ctx, guild_id.get(), LogCategory::Edit, embed).await;
}

/// Loads a guild's configuration, treating an unconfigured guild as nothing to log.
async fn guild_config(db: &DatabaseConnection, guild_id: u64) -> Option<GuildLogConfig> {
    match LogConfigService::new(db).get_by_guild_id(guild_id).await {
        Ok(config) => Some(config),
        Err(AppError::NotFound(_)) => None,
        Err(e) => {
            tracing::error!(
                "Failed to read log configuration for guild {}: {:?}",
                guild_id,
                e
            );
            None
        }
    }
}

fn is_lumberjack_channel(config: &GuildLogConfig, channel_id: ChannelId) -> bool {
    config.channel(LogCategory::LumberjackLog) == Some(channel_id.get())
}
