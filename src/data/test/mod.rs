mod guild_log;
mod lumberjack_message;
