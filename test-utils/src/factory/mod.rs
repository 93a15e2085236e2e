//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let config = factory::guild_log::create_guild_log(&db).await?;
//!
//!     // Create with custom values
//!     let message = factory::lumberjack_message::LumberjackMessageFactory::new(&db)
//!         .channel_id("42")
//!         .age(chrono::Duration::days(8))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_log` - Create guild log configuration rows
//! - `lumberjack_message` - Create tracked lumberjack message rows
//! - `helpers` - Shared ID generation

pub mod guild_log;
pub mod helpers;
pub mod lumberjack_message;

pub use guild_log::create_guild_log;
pub use lumberjack_message::create_lumberjack_message;
