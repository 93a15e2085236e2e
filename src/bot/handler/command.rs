//! Text command execution.
//!
//! Parsing lives in `model::command`; this module runs a parsed command against the
//! services and replies in the channel it was typed in.

use std::time::Instant;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EditMessage, Message};

use crate::{
    error::AppError,
    model::command::{help_text, ChannelTarget, Command},
    service::{
        log_config::LogConfigService, lumberjack_log::LumberjackLogService,
        notification::lumberjack,
    },
};

/// Runs a parsed command.
///
/// # Arguments
/// - `db` - Database connection for the log configuration
/// - `prefix` - Command prefix, used in help text
/// - `ctx` - Discord context for replying
/// - `message` - The message the command was typed in
/// - `guild_id` - Guild the message was sent in
/// - `command` - The parsed command
///
/// # Returns
/// - `Ok(())` - Command handled, including user errors answered with a reply
/// - `Err(AppError)` - Replying or a database operation failed
pub async fn run_command(
    db: &DatabaseConnection,
    prefix: &str,
    ctx: &Context,
    message: &Message,
    guild_id: u64,
    command: Command,
) -> Result<(), AppError> {
    match command {
        Command::Ping => ping(ctx, message).await,
        Command::Help => {
            message.channel_id.say(&ctx.http, help_text(prefix)).await?;
            Ok(())
        }
        Command::Log { category, target } => {
            let channel_id = match target {
                ChannelTarget::Here => message.channel_id.get(),
                ChannelTarget::Channel(channel_id) => channel_id,
            };
            change_log_channel(db, prefix, ctx, message, guild_id, &category, Some(channel_id))
                .await
        }
        Command::Clear { category } => {
            change_log_channel(db, prefix, ctx, message, guild_id, &category, None).await
        }
    }
}

/// Replies with the time taken to post a message.
async fn ping(ctx: &Context, message: &Message) -> Result<(), AppError> {
    let start = Instant::now();
    let mut reply = message.channel_id.say(&ctx.http, "Pong!").await?;
    let elapsed = start.elapsed().as_millis();

    reply
        .edit(ctx, EditMessage::new().content(format!("Pong! `{}ms`", elapsed)))
        .await?;

    Ok(())
}

/// Sets or clears a log channel after checking the author may manage the server.
async fn change_log_channel(
    db: &DatabaseConnection,
    prefix: &str,
    ctx: &Context,
    message: &Message,
    guild_id: u64,
    category: &str,
    channel_id: Option<u64>,
) -> Result<(), AppError> {
    if !can_manage_guild(ctx, message).await {
        message
            .channel_id
            .say(&ctx.http, "You need the Manage Server permission to change logs")
            .await?;
        return Ok(());
    }

    let service = LogConfigService::new(db);
    let result = match channel_id {
        Some(channel_id) => service.set_log_channel(category, guild_id, channel_id).await,
        None => service.clear_log_channel(category, guild_id).await,
    };

    let label = match result {
        Ok(label) => label,
        Err(AppError::InvalidLogCategory(name)) => {
            message
                .channel_id
                .say(
                    &ctx.http,
                    format!(
                        "`{}` is not a log type. See `{}help` for the list of log types",
                        name, prefix
                    ),
                )
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let reply = match channel_id {
        Some(channel_id) => format!("{} logs will now appear in <#{}>", label, channel_id),
        None => format!("{} logs have been disabled", label),
    };
    message.channel_id.say(&ctx.http, reply).await?;

    tracing::info!(
        "{} logs in guild {} set to {:?} by {}",
        label,
        guild_id,
        channel_id,
        message.author.id
    );

    LumberjackLogService::new(db, &ctx.http)
        .post(
            guild_id,
            lumberjack::log_channel_changed(label, channel_id, message.author.id.get()),
        )
        .await?;

    Ok(())
}

/// Whether the message author has the Manage Server permission in the message's channel.
async fn can_manage_guild(ctx: &Context, message: &Message) -> bool {
    let member = match message.member(ctx).await {
        Ok(member) => member,
        Err(e) => {
            tracing::warn!(
                "Failed to fetch member {} for permission check: {}",
                message.author.id,
                e
            );
            return false;
        }
    };

    let Some(guild) = message.guild(&ctx.cache) else {
        return false;
    };
    let Some(channel) = guild.channels.get(&message.channel_id) else {
        return false;
    };

    guild.user_permissions_in(channel, &member).manage_guild()
}
