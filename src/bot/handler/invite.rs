//! Invite create and delete handlers.
//!
//! Keep the invite store in step with the guild's invites and post a notice to the
//! guild's ljlog channel.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, InviteCreateEvent, InviteDeleteEvent};

use crate::{
    model::invite::{Invite, Inviter},
    service::{
        invite_store::InviteStore, lumberjack_log::LumberjackLogService,
        notification::lumberjack,
    },
};

/// Handles invite creation by adding the invite to the store.
pub async fn handle_invite_create(
    db: &DatabaseConnection,
    invites: &InviteStore,
    ctx: Context,
    event: InviteCreateEvent,
) {
    let Some(guild_id) = event.guild_id else {
        tracing::warn!("Invite {} created without guild_id", event.code);
        return;
    };
    let guild_id = guild_id.get();

    let invite = Invite {
        url: Invite::url_for_code(&event.code),
        code: event.code,
        guild_id,
        uses: event.uses,
        inviter: event.inviter.map(|user| Inviter {
            id: user.id.get(),
            tag: user.tag(),
        }),
    };

    tracing::info!("Invite created: {} in guild {}", invite.code, guild_id);

    let embed = lumberjack::invite_created(&invite);
    invites.add(invite).await;

    if let Err(e) = LumberjackLogService::new(db, &ctx.http)
        .post(guild_id, embed)
        .await
    {
        tracing::error!(
            "Failed to post invite create notice in guild {}: {:?}",
            guild_id,
            e
        );
    }
}

/// Handles invite deletion by removing the invite from the store.
pub async fn handle_invite_delete(
    db: &DatabaseConnection,
    invites: &InviteStore,
    ctx: Context,
    event: InviteDeleteEvent,
) {
    let Some(guild_id) = event.guild_id else {
        tracing::warn!("Invite {} deleted without guild_id", event.code);
        return;
    };
    let guild_id = guild_id.get();

    tracing::info!("Invite deleted: {} in guild {}", event.code, guild_id);

    let removed = match invites.remove(&event.code).await {
        Ok(invite) => Some(invite),
        Err(e) => {
            tracing::debug!("Deleted invite was not tracked: {}", e);
            None
        }
    };

    let embed = lumberjack::invite_deleted(&event.code, removed.as_ref());

    if let Err(e) = LumberjackLogService::new(db, &ctx.http)
        .post(guild_id, embed)
        .await
    {
        tracing::error!(
            "Failed to post invite delete notice in guild {}: {:?}",
            guild_id,
            e
        );
    }
}
