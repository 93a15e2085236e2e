use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::lumberjack_message::{CreateLumberjackMessageParam, LumberjackMessage},
};

pub struct LumberjackMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LumberjackMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a posted lumberjack message
    ///
    /// # Returns
    /// - `Ok(LumberjackMessage)`: The tracked message record
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        param: CreateLumberjackMessageParam,
    ) -> Result<LumberjackMessage, AppError> {
        let entity = entity::lumberjack_messages::ActiveModel {
            message_id: ActiveValue::Set(param.message_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            created_at: ActiveValue::Set(param.created_at),
        }
        .insert(self.db)
        .await?;

        LumberjackMessage::from_entity(entity)
    }

    /// Gets all messages posted strictly before the cutoff, oldest first
    ///
    /// # Returns
    /// - `Ok(Vec<LumberjackMessage>)`: Messages older than the cutoff
    /// - `Err(AppError)`: Database error
    pub async fn get_older_than(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<LumberjackMessage>, AppError> {
        entity::prelude::LumberjackMessages::find()
            .filter(entity::lumberjack_messages::Column::CreatedAt.lt(cutoff))
            .order_by_asc(entity::lumberjack_messages::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(LumberjackMessage::from_entity)
            .collect()
    }

    /// Stops tracking a message
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of records deleted
    /// - `Err(AppError)`: Database error
    pub async fn delete(&self, message_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::LumberjackMessages::delete_by_id(message_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
