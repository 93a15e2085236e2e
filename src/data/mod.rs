//! Database repository layer.
//!
//! Repositories wrap SeaORM entity queries for the `guild_logs` and
//! `lumberjack_messages` tables and convert rows to domain models at the boundary,
//! so services never handle entity models directly.

pub mod guild_log;
pub mod lumberjack_message;

#[cfg(test)]
mod test;
