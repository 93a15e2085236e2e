//! Per-guild log channel configuration.
//!
//! Wraps the `guild_logs` repository with the rules the commands rely on: category
//! names are matched case-insensitively, unknown names are rejected before anything
//! is written, and looking up a guild with no configuration row is an error.

use sea_orm::DatabaseConnection;

use crate::{
    data::guild_log::GuildLogRepository,
    error::AppError,
    model::guild_log::{GuildLogConfig, LogCategory},
};

pub struct LogConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogConfigService<'a> {
    /// Creates a new LogConfigService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LogConfigService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures a guild has a configuration row.
    ///
    /// A new guild starts with every category disabled. Re-adding a known guild keeps
    /// its existing channel assignments.
    ///
    /// # Returns
    /// - `Ok(GuildLogConfig)` - The guild's configuration
    /// - `Err(AppError)` - Database error
    pub async fn add_guild(&self, guild_id: u64) -> Result<GuildLogConfig, AppError> {
        GuildLogRepository::new(self.db)
            .create_if_missing(guild_id)
            .await
    }

    /// Routes a log category to a channel.
    ///
    /// # Arguments
    /// - `category` - Category name as typed by the user, e.g. `bulk_delete` or `LJLOG`
    /// - `guild_id` - Guild being configured
    /// - `channel_id` - Destination channel
    ///
    /// # Returns
    /// - `Ok(&'static str)` - Label of the updated category, e.g. `"Bulk Delete"`
    /// - `Err(AppError::InvalidLogCategory)` - Unknown category name; nothing was changed
    /// - `Err(AppError::NotFound)` - Guild has no configuration row
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_log_channel(
        &self,
        category: &str,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<&'static str, AppError> {
        self.assign(category, guild_id, Some(channel_id)).await
    }

    /// Disables a log category.
    ///
    /// # Returns
    /// - `Ok(&'static str)` - Label of the disabled category
    /// - `Err(AppError::InvalidLogCategory)` - Unknown category name; nothing was changed
    /// - `Err(AppError::NotFound)` - Guild has no configuration row
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn clear_log_channel(
        &self,
        category: &str,
        guild_id: u64,
    ) -> Result<&'static str, AppError> {
        self.assign(category, guild_id, None).await
    }

    async fn assign(
        &self,
        category: &str,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<&'static str, AppError> {
        let category = LogCategory::from_user_input(category)
            .ok_or_else(|| AppError::InvalidLogCategory(category.to_string()))?;

        GuildLogRepository::new(self.db)
            .set_channel(guild_id, category, channel_id)
            .await?
            .ok_or_else(|| guild_not_found(guild_id))?;

        Ok(category.label())
    }

    /// Gets a guild's full configuration.
    ///
    /// # Returns
    /// - `Ok(GuildLogConfig)` - Configuration row
    /// - `Err(AppError::NotFound)` - Guild has no configuration row
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<GuildLogConfig, AppError> {
        GuildLogRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| guild_not_found(guild_id))
    }

    /// Destination channel for an event, if the guild routes it anywhere.
    ///
    /// Events for guilds without a configuration row are dropped rather than failing.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Channel the event should be posted to
    /// - `Ok(None)` - Category disabled or guild not configured
    /// - `Err(AppError)` - Database error
    pub async fn channel_for(
        &self,
        guild_id: u64,
        category: LogCategory,
    ) -> Result<Option<u64>, AppError> {
        let config = GuildLogRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?;

        Ok(config.and_then(|config| config.channel(category)))
    }

    /// Deletes a guild's configuration row.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether a row was deleted
    /// - `Err(AppError)` - Database error
    pub async fn remove_guild(&self, guild_id: u64) -> Result<bool, AppError> {
        let deleted = GuildLogRepository::new(self.db).delete(guild_id).await?;

        Ok(deleted > 0)
    }
}

fn guild_not_found(guild_id: u64) -> AppError {
    AppError::NotFound(format!("No log configuration for guild {}", guild_id))
}
