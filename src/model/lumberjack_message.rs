//! Domain models for tracked lumberjack log messages.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Internal log message posted by the bot, deleted once it exceeds the retention window.
#[derive(Debug, Clone, PartialEq)]
pub struct LumberjackMessage {
    /// Discord message ID.
    pub message_id: u64,
    /// Channel the message was posted in.
    pub channel_id: u64,
    /// When the message was posted.
    pub created_at: DateTime<Utc>,
}

impl LumberjackMessage {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LumberjackMessage)` - Parsed message record
    /// - `Err(AppError::InternalErr)` - A stored id is not a valid u64
    pub fn from_entity(entity: entity::lumberjack_messages::Model) -> Result<Self, AppError> {
        Ok(Self {
            message_id: parse_u64_from_string(entity.message_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for tracking a newly posted lumberjack message.
#[derive(Debug, Clone)]
pub struct CreateLumberjackMessageParam {
    pub message_id: u64,
    pub channel_id: u64,
    pub created_at: DateTime<Utc>,
}
