use crate::{data::guild_log::GuildLogRepository, model::guild_log::LogCategory};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_if_missing;
mod delete;
mod find_by_guild_id;
mod set_channel;
