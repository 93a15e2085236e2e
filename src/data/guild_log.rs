//! Guild log configuration repository for database operations.
//!
//! This module provides the `GuildLogRepository` for managing the per-guild rows of
//! the `guild_logs` table. Each row maps every log category to an optional
//! destination channel. The repository handles creation, lookup, per-category
//! updates and deletion, converting entity models to `GuildLogConfig` at the
//! infrastructure boundary.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    error::AppError,
    model::guild_log::{GuildLogConfig, LogCategory},
};

/// Repository providing database operations for guild log configuration.
pub struct GuildLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildLogRepository<'a> {
    /// Creates a new GuildLogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildLogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the configuration row for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildLogConfig))` - Configuration found
    /// - `Ok(None)` - Guild has no configuration row
    /// - `Err(AppError)` - Database error or malformed stored id
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildLogConfig>, AppError> {
        let entity = entity::prelude::GuildLogs::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        entity.map(GuildLogConfig::from_entity).transpose()
    }

    /// Creates an all-disabled configuration row unless one already exists.
    ///
    /// Existing rows are returned untouched so channel assignments survive the bot
    /// reconnecting or rejoining a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(GuildLogConfig)` - The existing or newly created configuration
    /// - `Err(AppError)` - Database error during lookup or insert
    pub async fn create_if_missing(&self, guild_id: u64) -> Result<GuildLogConfig, AppError> {
        if let Some(existing) = self.find_by_guild_id(guild_id).await? {
            return Ok(existing);
        }

        let entity = entity::guild_logs::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            join_id: ActiveValue::Set(None),
            leave_id: ActiveValue::Set(None),
            delete_id: ActiveValue::Set(None),
            delete_bulk: ActiveValue::Set(None),
            edit: ActiveValue::Set(None),
            username: ActiveValue::Set(None),
            nickname: ActiveValue::Set(None),
            avatar: ActiveValue::Set(None),
            stat_channel: ActiveValue::Set(None),
            lj_id: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        GuildLogConfig::from_entity(entity)
    }

    /// Sets or clears the channel for one category.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `category` - Category whose column is updated
    /// - `channel_id` - New channel, or `None` to disable the category
    ///
    /// # Returns
    /// - `Ok(Some(GuildLogConfig))` - Updated configuration
    /// - `Ok(None)` - Guild has no configuration row, nothing was changed
    /// - `Err(AppError)` - Database error during lookup or update
    pub async fn set_channel(
        &self,
        guild_id: u64,
        category: LogCategory,
        channel_id: Option<u64>,
    ) -> Result<Option<GuildLogConfig>, AppError> {
        let Some(existing) = entity::prelude::GuildLogs::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let value = ActiveValue::Set(channel_id.map(|id| id.to_string()));
        let mut active: entity::guild_logs::ActiveModel = existing.into();

        match category {
            LogCategory::Join => active.join_id = value,
            LogCategory::Leave => active.leave_id = value,
            LogCategory::Delete => active.delete_id = value,
            LogCategory::BulkDelete => active.delete_bulk = value,
            LogCategory::Edit => active.edit = value,
            LogCategory::Username => active.username = value,
            LogCategory::Nickname => active.nickname = value,
            LogCategory::Avatar => active.avatar = value,
            LogCategory::LumberjackLog => active.lj_id = value,
            LogCategory::MemberCountStat => active.stat_channel = value,
        }

        let updated = active.update(self.db).await?;

        Ok(Some(GuildLogConfig::from_entity(updated)?))
    }

    /// Deletes the configuration row for a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, guild_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::GuildLogs::delete_by_id(guild_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
