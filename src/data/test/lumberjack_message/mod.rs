use crate::{
    data::lumberjack_message::LumberjackMessageRepository,
    model::lumberjack_message::CreateLumberjackMessageParam,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::lumberjack_message::LumberjackMessageFactory};

mod create;
mod delete;
mod get_older_than;
