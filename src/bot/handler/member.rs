//! Member event handlers for membership logs.
//!
//! Joins are attributed to an invite before anything is posted, so the invite store
//! stays current even when the guild has no join log channel. Joins and leaves also
//! refresh the member count stat channel when one is configured.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, EditChannel, GuildId, GuildMemberUpdateEvent, Member, User,
};

use crate::{
    model::{guild_log::LogCategory, member::MemberProfile},
    service::{
        invite_attribution::InviteAttributionService,
        invite_store::InviteStore,
        log_config::LogConfigService,
        notification::member as embeds,
    },
};

use super::post_log;

/// Handles a member joining a guild.
///
/// # Arguments
/// - `db` - Database connection for the log configuration
/// - `invites` - Invite snapshot used for attribution
/// - `ctx` - Discord context for listing invites and posting
/// - `new_member` - The member who joined
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    invites: &InviteStore,
    ctx: Context,
    new_member: Member,
) {
    let guild_id = new_member.guild_id.get();

    let attribution = match InviteAttributionService::new(invites, &*ctx.http)
        .attribute_join(guild_id)
        .await
    {
        Ok(attribution) => attribution,
        Err(e) => {
            tracing::error!(
                "Failed to attribute join of {} in guild {}: {}",
                new_member.user.id,
                guild_id,
                e
            );
            return;
        }
    };

    tracing::info!(
        "User {} joined guild {} via {:?}",
        new_member.user.id,
        guild_id,
        attribution
    );

    let member_count = member_count(&ctx, new_member.guild_id);
    let profile = MemberProfile::from_member(&new_member);
    let embed = embeds::member_joined(&profile, &attribution, member_count, Utc::now());

    post_log(db, &ctx, guild_id, LogCategory::Join, embed).await;
    update_member_count_channel(db, &ctx, guild_id, member_count).await;
}

/// Handles a member leaving or being removed from a guild.
///
/// Join date and roles are only shown when the member was cached.
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    member_data_if_available: Option<Member>,
) {
    let profile = match &member_data_if_available {
        Some(member) => MemberProfile::from_member(member),
        None => MemberProfile::from_user(&user),
    };

    tracing::info!("User {} left guild {}", user.id, guild_id);

    let member_count = member_count(&ctx, guild_id);
    let embed = embeds::member_left(&profile, member_count, Utc::now());

    post_log(db, &ctx, guild_id.get(), LogCategory::Leave, embed).await;
    update_member_count_channel(db, &ctx, guild_id.get(), member_count).await;
}

/// Handles member updates, logging nickname, username and avatar changes.
///
/// Changes can only be detected when the previous member state was cached.
pub async fn handle_guild_member_update(
    db: &DatabaseConnection,
    ctx: Context,
    old_if_available: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let Some(old) = old_if_available else {
        return;
    };

    let guild_id = event.guild_id.get();
    let profile = MemberProfile::from_user(&event.user);

    if old.nick != event.nick {
        let embed =
            embeds::nickname_changed(&profile, old.nick.as_deref(), event.nick.as_deref());
        post_log(db, &ctx, guild_id, LogCategory::Nickname, embed).await;
    }

    let old_tag = old.user.tag();
    if old_tag != profile.tag {
        let embed = embeds::username_changed(&profile, &old_tag, &profile.tag);
        post_log(db, &ctx, guild_id, LogCategory::Username, embed).await;
    }

    if old.user.avatar != event.user.avatar {
        let embed = embeds::avatar_changed(&profile, &old.user.face());
        post_log(db, &ctx, guild_id, LogCategory::Avatar, embed).await;
    }
}

/// Current member count from the cache.
fn member_count(ctx: &Context, guild_id: GuildId) -> Option<u64> {
    ctx.cache.guild(guild_id).map(|guild| guild.member_count)
}

/// Renames the member count stat channel to `Members: N`.
async fn update_member_count_channel(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_id: u64,
    member_count: Option<u64>,
) {
    let Some(count) = member_count else {
        return;
    };

    let channel_id = match LogConfigService::new(db)
        .channel_for(guild_id, LogCategory::MemberCountStat)
        .await
    {
        Ok(Some(channel_id)) => channel_id,
        Ok(None) => return,
        Err(e) => {
            tracing::error!(
                "Failed to read stat channel for guild {}: {:?}",
                guild_id,
                e
            );
            return;
        }
    };

    if let Err(e) = ChannelId::new(channel_id)
        .edit(ctx, EditChannel::new().name(format!("Members: {}", count)))
        .await
    {
        tracing::warn!(
            "Failed to update member count channel {} in guild {}: {}",
            channel_id,
            guild_id,
            e
        );
    }
}
