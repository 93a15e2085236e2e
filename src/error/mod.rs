//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services and startup code. It wraps
//! configuration, database and Discord errors, and carries the two domain failures
//! the stores report to their callers: a missing key and an unrecognized log category.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected internal failure such as a malformed stored snowflake.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// The addressed key does not exist.
    ///
    /// Raised by the invite store for an unknown invite code and by the log
    /// configuration store for a guild without a configuration row.
    ///
    /// # Fields
    /// - Message describing what was not found
    #[error("{0}")]
    NotFound(String),

    /// The provided log category name does not match any known category.
    ///
    /// No configuration is changed when this is returned.
    ///
    /// # Fields
    /// - The rejected category name
    #[error("Unknown log category '{0}'")]
    InvalidLogCategory(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
