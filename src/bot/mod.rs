//! Discord bot integration.
//!
//! The bot listens to guild, member, invite and message events, routes log embeds to
//! each guild's configured channels and answers the text commands.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and removal
//! - `GUILD_MEMBERS` - Member joins, leaves and updates (privileged intent)
//! - `GUILD_INVITES` - Invite creation and deletion
//! - `GUILD_MESSAGES` - Message create, update and delete events
//! - `MESSAGE_CONTENT` - Command text and logged message content (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
