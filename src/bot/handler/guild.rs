//! Guild availability handlers.
//!
//! `guild_create` fires on startup for every guild the bot is in, when the bot joins a
//! new guild and when a guild recovers from an outage. Each time the guild's log
//! configuration row is ensured and its invites are loaded into the invite store.
//!
//! `guild_delete` fires both when the bot is removed from a guild and when a guild
//! goes unavailable. Only a removal drops the guild's invites and configuration.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::service::{invite_store::InviteStore, log_config::LogConfigService};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// Invite loading needs the Manage Server permission. Without it the guild's joins are
/// attributed against an empty snapshot.
///
/// # Arguments
/// - `db` - Database connection for the log configuration
/// - `invites` - Invite store to seed
/// - `ctx` - Discord context for listing invites
/// - `guild` - Guild that became available
/// - `_is_new` - Whether this is a new guild join (unused)
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    invites: &InviteStore,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild_id,
        guild.member_count
    );

    if let Err(e) = LogConfigService::new(db).add_guild(guild_id).await {
        tracing::error!(
            "Failed to create log configuration for guild {}: {:?}",
            guild_id,
            e
        );
    }

    match invites.add_all_for_guild(guild_id, &*ctx.http).await {
        Ok(count) => {
            tracing::debug!("Loaded {} invites for guild {}", count, guild_id);
        }
        Err(e) => {
            tracing::warn!("Failed to load invites for guild {}: {}", guild_id, e);
        }
    }
}

/// Handles the guild_delete event.
///
/// # Arguments
/// - `db` - Database connection for the log configuration
/// - `invites` - Invite store to prune
/// - `_ctx` - Discord context (unused)
/// - `incomplete` - Guild id and whether this is an outage rather than a removal
/// - `_full` - Cached guild data (unused)
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    invites: &InviteStore,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    let guild_id = incomplete.id.get();

    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", guild_id);
        return;
    }

    let removed = invites.remove_all_for_guild(guild_id).await;

    match LogConfigService::new(db).remove_guild(guild_id).await {
        Ok(_) => tracing::info!(
            "Removed from guild {} - dropped {} invites and log configuration",
            guild_id,
            removed
        ),
        Err(e) => tracing::error!(
            "Failed to delete log configuration for guild {}: {:?}",
            guild_id,
            e
        ),
    }
}
