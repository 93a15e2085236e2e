//! Platform operations the services depend on.
//!
//! `InviteSource` and `MessageRemover` are implemented for Serenity's `Http` client
//! and by in-memory fakes in tests.

use serenity::all::{ChannelId, GuildId, MessageId};
use serenity::async_trait;
use serenity::http::Http;

use crate::{error::AppError, model::invite::Invite};

/// Lists the invites that currently exist for a guild.
#[async_trait]
pub trait InviteSource: Send + Sync {
    /// Fetches every invite of a guild with its current use count.
    ///
    /// # Returns
    /// - `Ok(Vec<Invite>)` - Invites in the order the platform lists them
    /// - `Err(AppError::DiscordErr)` - Request failed, e.g. missing Manage Server permission
    async fn guild_invites(&self, guild_id: u64) -> Result<Vec<Invite>, AppError>;
}

/// Result of a remote message deletion that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteDelete {
    /// The message existed and was deleted.
    Deleted,
    /// The message (or its channel) no longer exists.
    AlreadyGone,
}

/// Deletes messages posted by the bot.
#[async_trait]
pub trait MessageRemover: Send + Sync {
    /// Fetches then deletes a message.
    ///
    /// A not-found response is reported as `RemoteDelete::AlreadyGone` instead of an error.
    ///
    /// # Returns
    /// - `Ok(RemoteDelete)` - Message deleted or already gone
    /// - `Err(AppError::DiscordErr)` - Any other request failure
    async fn remove_message(&self, channel_id: u64, message_id: u64)
        -> Result<RemoteDelete, AppError>;
}

#[async_trait]
impl InviteSource for Http {
    async fn guild_invites(&self, guild_id: u64) -> Result<Vec<Invite>, AppError> {
        let invites = self.get_guild_invites(GuildId::new(guild_id)).await?;

        Ok(invites
            .into_iter()
            .map(|invite| Invite::from_rich_invite(guild_id, invite))
            .collect())
    }
}

#[async_trait]
impl MessageRemover for Http {
    async fn remove_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<RemoteDelete, AppError> {
        let channel_id = ChannelId::new(channel_id);
        let message_id = MessageId::new(message_id);

        let result = match self.get_message(channel_id, message_id).await {
            Ok(_) => self.delete_message(channel_id, message_id, None).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => Ok(RemoteDelete::Deleted),
            Err(e) if is_not_found(&e) => Ok(RemoteDelete::AlreadyGone),
            Err(e) => Err(e.into()),
        }
    }
}

/// Whether a Serenity error is an HTTP 404 from Discord.
pub fn is_not_found(error: &serenity::Error) -> bool {
    match error {
        serenity::Error::Http(e) => e.status_code().map(|status| status.as_u16()) == Some(404),
        _ => false,
    }
}
