//! Lumberjack Test Utils
//!
//! Provides shared testing utilities for the lumberjack bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories that
//! insert `guild_logs` and `lumberjack_messages` rows, and Serenity object fixtures.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildLogs;
//!
//! #[tokio::test]
//! async fn test_guild_log_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildLogs)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
