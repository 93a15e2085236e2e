//! Ready event handler for bot initialization.
//!
//! The ready event fires once per gateway connection after authentication. Guild
//! setup happens later, in `guild_create`, as each guild becomes available.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connection and advertises the help command as the bot's activity.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
/// - `command_prefix` - Prefix shown in the activity
pub async fn handle_ready(ctx: Context, ready: Ready, command_prefix: &str) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::listening(format!(
        "{}help",
        command_prefix
    ))));
}
