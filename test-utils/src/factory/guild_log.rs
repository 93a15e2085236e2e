//! Guild log configuration factory for creating test rows.
//!
//! This module provides a factory for inserting `guild_logs` rows with every channel
//! disabled by default. Individual channels can be set through the builder.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild log configurations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_log::GuildLogFactory;
///
/// let config = GuildLogFactory::new(&db)
///     .guild_id("1")
///     .join_id("2")
///     .build()
///     .await?;
/// ```
pub struct GuildLogFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::guild_logs::Model,
}

impl<'a> GuildLogFactory<'a> {
    /// Creates a new GuildLogFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented id
    /// - every channel: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            model: entity::guild_logs::Model {
                guild_id: next_id().to_string(),
                join_id: None,
                leave_id: None,
                delete_id: None,
                delete_bulk: None,
                edit: None,
                username: None,
                nickname: None,
                avatar: None,
                stat_channel: None,
                lj_id: None,
            },
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.model.guild_id = guild_id.into();
        self
    }

    /// Sets the join log channel.
    pub fn join_id(mut self, channel_id: impl Into<String>) -> Self {
        self.model.join_id = Some(channel_id.into());
        self
    }

    /// Sets the leave log channel.
    pub fn leave_id(mut self, channel_id: impl Into<String>) -> Self {
        self.model.leave_id = Some(channel_id.into());
        self
    }

    /// Sets the lumberjack log channel.
    pub fn lj_id(mut self, channel_id: impl Into<String>) -> Self {
        self.model.lj_id = Some(channel_id.into());
        self
    }

    /// Sets the member count stat channel.
    pub fn stat_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.model.stat_channel = Some(channel_id.into());
        self
    }

    /// Builds and inserts the guild log row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_logs::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_logs::Model, DbErr> {
        let model = self.model;

        entity::guild_logs::ActiveModel {
            guild_id: ActiveValue::Set(model.guild_id),
            join_id: ActiveValue::Set(model.join_id),
            leave_id: ActiveValue::Set(model.leave_id),
            delete_id: ActiveValue::Set(model.delete_id),
            delete_bulk: ActiveValue::Set(model.delete_bulk),
            edit: ActiveValue::Set(model.edit),
            username: ActiveValue::Set(model.username),
            nickname: ActiveValue::Set(model.nickname),
            avatar: ActiveValue::Set(model.avatar),
            stat_channel: ActiveValue::Set(model.stat_channel),
            lj_id: ActiveValue::Set(model.lj_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an all-disabled guild log row with a unique guild id.
///
/// Shorthand for `GuildLogFactory::new(db).build().await`.
pub async fn create_guild_log(
    db: &DatabaseConnection,
) -> Result<entity::guild_logs::Model, DbErr> {
    GuildLogFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_guild_log_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildLogs)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let config = create_guild_log(db).await?;

        assert!(!config.guild_id.is_empty());
        assert!(config.join_id.is_none());
        assert!(config.lj_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_guild_log_with_custom_channels() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildLogs)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let config = GuildLogFactory::new(db)
            .guild_id("1")
            .join_id("2")
            .lj_id("3")
            .build()
            .await?;

        assert_eq!(config.guild_id, "1");
        assert_eq!(config.join_id, Some("2".to_string()));
        assert_eq!(config.lj_id, Some("3".to_string()));
        assert!(config.leave_id.is_none());

        Ok(())
    }
}
