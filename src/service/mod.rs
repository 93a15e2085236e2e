//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's event handlers and the data (repository) layer:
//!
//! - **Invite tracking**: the in-memory invite store and join attribution
//! - **Log configuration**: per-guild log channel assignment
//! - **Retention**: sweeping expired lumberjack messages
//! - **Notifications**: embed construction and posting
//!
//! Platform access goes through the traits in [`discord`], so services can be
//! exercised with fakes instead of a live Discord connection.

pub mod discord;
pub mod invite_attribution;
pub mod invite_store;
pub mod log_config;
pub mod lumberjack_log;
pub mod notification;
pub mod retention;

#[cfg(test)]
pub(crate) mod fake;
