//! Posting to a guild's ljlog channel.
//!
//! Every message posted here is recorded in `lumberjack_messages` so the retention
//! sweep can delete it later.

use sea_orm::DatabaseConnection;
use serenity::all::CreateEmbed;
use serenity::http::Http;

use crate::{
    data::lumberjack_message::LumberjackMessageRepository,
    error::AppError,
    model::{
        guild_log::LogCategory,
        lumberjack_message::{CreateLumberjackMessageParam, LumberjackMessage},
    },
    service::{log_config::LogConfigService, notification::post_embed},
};

pub struct LumberjackLogService<'a> {
    db: &'a DatabaseConnection,
    http: &'a Http,
}

impl<'a> LumberjackLogService<'a> {
    /// Creates a new LumberjackLogService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http` - Discord HTTP client for posting
    pub fn new(db: &'a DatabaseConnection, http: &'a Http) -> Self {
        Self { db, http }
    }

    /// Posts an embed to the guild's ljlog channel and tracks the message.
    ///
    /// # Returns
    /// - `Ok(Some(LumberjackMessage))` - Posted and tracked
    /// - `Ok(None)` - The guild has no ljlog channel configured
    /// - `Err(AppError)` - Posting or recording failed
    pub async fn post(
        &self,
        guild_id: u64,
        embed: CreateEmbed,
    ) -> Result<Option<LumberjackMessage>, AppError> {
        let Some(channel_id) = LogConfigService::new(self.db)
            .channel_for(guild_id, LogCategory::LumberjackLog)
            .await?
        else {
            return Ok(None);
        };

        let message = post_embed(self.http, channel_id, embed).await?;

        let tracked = LumberjackMessageRepository::new(self.db)
            .create(CreateLumberjackMessageParam {
                message_id: message.id.get(),
                channel_id: message.channel_id.get(),
                created_at: message.timestamp.to_utc(),
            })
            .await?;

        Ok(Some(tracked))
    }
}
