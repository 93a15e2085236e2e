//! Domain models for per-guild log channel configuration.
//!
//! Each guild has one configuration row mapping every log category to an optional
//! destination channel. A category without a channel is disabled.

use crate::{error::AppError, util::parse::parse_optional_u64};

/// A kind of event that can be routed to its own log channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Join,
    Leave,
    Delete,
    BulkDelete,
    Edit,
    Username,
    Nickname,
    Avatar,
    /// Internal bot notices, swept after the retention window.
    LumberjackLog,
    /// Voice channel renamed to the guild's member count.
    ///
    /// Not settable through commands.
    MemberCountStat,
}

impl LogCategory {
    /// Categories users may assign through the `log` and `clear` commands.
    pub const USER_SETTABLE: [LogCategory; 9] = [
        LogCategory::Join,
        LogCategory::Leave,
        LogCategory::Delete,
        LogCategory::BulkDelete,
        LogCategory::Edit,
        LogCategory::Username,
        LogCategory::Nickname,
        LogCategory::Avatar,
        LogCategory::LumberjackLog,
    ];

    /// Matches a user-supplied category name.
    ///
    /// Matching is case-insensitive and accepts a few aliases for the longer names.
    /// The member count stat channel is never matched.
    ///
    /// # Arguments
    /// - `name` - Category name as typed by the user
    ///
    /// # Returns
    /// - `Some(LogCategory)` - Recognized user-settable category
    /// - `None` - Unknown name
    pub fn from_user_input(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "join" | "joins" => Some(Self::Join),
            "leave" | "leaves" => Some(Self::Leave),
            "delete" => Some(Self::Delete),
            "bulk_delete" | "bulkdelete" | "bulk" => Some(Self::BulkDelete),
            "edit" => Some(Self::Edit),
            "username" => Some(Self::Username),
            "nickname" | "nick" => Some(Self::Nickname),
            "avatar" => Some(Self::Avatar),
            "ljlog" | "lumberjack" => Some(Self::LumberjackLog),
            _ => None,
        }
    }

    /// Canonical name used in commands and help text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Leave => "leave",
            Self::Delete => "delete",
            Self::BulkDelete => "bulk_delete",
            Self::Edit => "edit",
            Self::Username => "username",
            Self::Nickname => "nickname",
            Self::Avatar => "avatar",
            Self::LumberjackLog => "ljlog",
            Self::MemberCountStat => "stat",
        }
    }

    /// Human-readable label returned after a configuration change.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Join => "Join",
            Self::Leave => "Leave",
            Self::Delete => "Delete",
            Self::BulkDelete => "Bulk Delete",
            Self::Edit => "Edit",
            Self::Username => "Username",
            Self::Nickname => "Nickname",
            Self::Avatar => "Avatar",
            Self::LumberjackLog => "Lumberjack Logs",
            Self::MemberCountStat => "Member Count",
        }
    }
}

/// Log channel configuration for a single guild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildLogConfig {
    pub guild_id: u64,
    pub join: Option<u64>,
    pub leave: Option<u64>,
    pub delete: Option<u64>,
    pub bulk_delete: Option<u64>,
    pub edit: Option<u64>,
    pub username: Option<u64>,
    pub nickname: Option<u64>,
    pub avatar: Option<u64>,
    pub lumberjack_log: Option<u64>,
    pub member_count_stat: Option<u64>,
}

impl GuildLogConfig {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildLogConfig)` - Parsed configuration
    /// - `Err(AppError::InternalErr)` - A stored id is not a valid u64
    pub fn from_entity(entity: entity::guild_logs::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: crate::util::parse::parse_u64_from_string(entity.guild_id)?,
            join: parse_optional_u64(entity.join_id)?,
            leave: parse_optional_u64(entity.leave_id)?,
            delete: parse_optional_u64(entity.delete_id)?,
            bulk_delete: parse_optional_u64(entity.delete_bulk)?,
            edit: parse_optional_u64(entity.edit)?,
            username: parse_optional_u64(entity.username)?,
            nickname: parse_optional_u64(entity.nickname)?,
            avatar: parse_optional_u64(entity.avatar)?,
            lumberjack_log: parse_optional_u64(entity.lj_id)?,
            member_count_stat: parse_optional_u64(entity.stat_channel)?,
        })
    }

    /// Destination channel for a category, `None` when the category is disabled.
    pub fn channel(&self, category: LogCategory) -> Option<u64> {
        match category {
            LogCategory::Join => self.join,
            LogCategory::Leave => self.leave,
            LogCategory::Delete => self.delete,
            LogCategory::BulkDelete => self.bulk_delete,
            LogCategory::Edit => self.edit,
            LogCategory::Username => self.username,
            LogCategory::Nickname => self.nickname,
            LogCategory::Avatar => self.avatar,
            LogCategory::LumberjackLog => self.lumberjack_log,
            LogCategory::MemberCountStat => self.member_count_stat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_names_case_insensitively() {
        assert_eq!(LogCategory::from_user_input("JOIN"), Some(LogCategory::Join));
        assert_eq!(
            LogCategory::from_user_input("Bulk_Delete"),
            Some(LogCategory::BulkDelete)
        );
        assert_eq!(
            LogCategory::from_user_input("LJLog"),
            Some(LogCategory::LumberjackLog)
        );
    }

    #[test]
    fn every_settable_category_round_trips_through_its_name() {
        for category in LogCategory::USER_SETTABLE {
            assert_eq!(LogCategory::from_user_input(category.name()), Some(category));
        }
    }

    #[test]
    fn stat_channel_is_not_user_settable() {
        assert_eq!(LogCategory::from_user_input("stat"), None);
        assert_eq!(LogCategory::from_user_input("stat_channel"), None);
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(LogCategory::from_user_input("not_a_category"), None);
        assert_eq!(LogCategory::from_user_input(""), None);
    }

    #[test]
    fn converts_entity_with_missing_channels() {
        let config = GuildLogConfig::from_entity(entity::guild_logs::Model {
            guild_id: "1".to_string(),
            join_id: Some("2".to_string()),
            leave_id: None,
            delete_id: None,
            delete_bulk: None,
            edit: None,
            username: None,
            nickname: None,
            avatar: None,
            stat_channel: Some("9".to_string()),
            lj_id: None,
        })
        .unwrap();

        assert_eq!(config.guild_id, 1);
        assert_eq!(config.channel(LogCategory::Join), Some(2));
        assert_eq!(config.channel(LogCategory::Leave), None);
        assert_eq!(config.channel(LogCategory::MemberCountStat), Some(9));
    }
}
