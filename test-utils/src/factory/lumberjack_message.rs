//! Lumberjack message factory for creating tracked message rows.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating tracked lumberjack messages.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::lumberjack_message::LumberjackMessageFactory;
///
/// let stale = LumberjackMessageFactory::new(&db)
///     .age(chrono::Duration::days(8))
///     .build()
///     .await?;
/// ```
pub struct LumberjackMessageFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: String,
    channel_id: String,
    age: Duration,
}

impl<'a> LumberjackMessageFactory<'a> {
    /// Creates a new LumberjackMessageFactory with default values.
    ///
    /// Defaults:
    /// - message_id: auto-incremented id
    /// - channel_id: auto-incremented id
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            message_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            age: Duration::zero(),
        }
    }

    /// Sets the message ID.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Sets the channel ID.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Backdates `created_at` by the given duration.
    pub fn age(mut self, age: Duration) -> Self {
        self.age = age;
        self
    }

    /// Builds and inserts the tracked message into the database.
    ///
    /// # Returns
    /// - `Ok(entity::lumberjack_messages::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::lumberjack_messages::Model, DbErr> {
        entity::lumberjack_messages::ActiveModel {
            message_id: ActiveValue::Set(self.message_id),
            channel_id: ActiveValue::Set(self.channel_id),
            created_at: ActiveValue::Set(Utc::now() - self.age),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tracked lumberjack message posted just now.
pub async fn create_lumberjack_message(
    db: &DatabaseConnection,
) -> Result<entity::lumberjack_messages::Model, DbErr> {
    LumberjackMessageFactory::new(db).build().await
}
