use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, CreateEmbed, EventHandler, Guild, GuildId, GuildMemberUpdateEvent,
    InviteCreateEvent, InviteDeleteEvent, Member, Message, MessageId, MessageUpdateEvent, Ready,
    UnavailableGuild, User,
};
use serenity::async_trait;

use crate::{
    model::guild_log::LogCategory,
    service::{invite_store::InviteStore, log_config::LogConfigService, notification::post_embed},
};

pub mod command;
pub mod guild;
pub mod invite;
pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// Last known invite use counts for every available guild
    pub invites: InviteStore,
    pub command_prefix: String,
}

impl Handler {
    pub fn new(db: DatabaseConnection, invites: InviteStore, command_prefix: String) -> Self {
        Self {
            db,
            invites,
            command_prefix,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, &self.command_prefix).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, &self.invites, ctx, guild, is_new).await;
    }

    /// Called when the bot is removed from a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.db, &self.invites, ctx, incomplete, full).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, &self.invites, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.db,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a member is updated in a guild (nickname, username, avatar, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old_if_available: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.db, ctx, old_if_available, new, event).await;
    }

    /// Called when an invite is created
    async fn invite_create(&self, ctx: Context, data: InviteCreateEvent) {
        invite::handle_invite_create(&self.db, &self.invites, ctx, data).await;
    }

    /// Called when an invite is deleted
    async fn invite_delete(&self, ctx: Context, data: InviteDeleteEvent) {
        invite::handle_invite_delete(&self.db, &self.invites, ctx, data).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, new_message: Message) {
        message::handle_message(&self.db, &self.command_prefix, ctx, new_message).await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(&self.db, ctx, channel_id, deleted_message_id, guild_id)
            .await;
    }

    /// Called when several messages are deleted at once
    async fn message_delete_bulk(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        multiple_deleted_messages_ids: Vec<MessageId>,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete_bulk(
            &self.db,
            ctx,
            channel_id,
            multiple_deleted_messages_ids,
            guild_id,
        )
        .await;
    }

    /// Called when a message is edited
    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message::handle_message_update(&self.db, ctx, old_if_available, new, event).await;
    }
}

/// Posts an embed to the guild's channel for a category, if one is configured.
async fn post_log(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_id: u64,
    category: LogCategory,
    embed: CreateEmbed,
) {
    let channel_id = match LogConfigService::new(db)
        .channel_for(guild_id, category)
        .await
    {
        Ok(Some(channel_id)) => channel_id,
        Ok(None) => return,
        Err(e) => {
            tracing::error!(
                "Failed to read {} log channel for guild {}: {:?}",
                category.name(),
                guild_id,
                e
            );
            return;
        }
    };

    if let Err(e) = post_embed(&ctx.http, channel_id, embed).await {
        tracing::error!(
            "Failed to post {} log to channel {} in guild {}: {}",
            category.name(),
            channel_id,
            guild_id,
            e
        );
    }
}

