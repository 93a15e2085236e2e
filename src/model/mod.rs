//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! from Serenity types at the platform boundary, so services never depend on either.

pub mod command;
pub mod guild_log;
pub mod invite;
pub mod lumberjack_message;
pub mod member;
