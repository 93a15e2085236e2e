//! Member details shown in membership log embeds.

use chrono::{DateTime, Utc};
use serenity::all::{Member, User};

/// Snapshot of a guild member taken from a Serenity event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub user_id: u64,
    /// Display tag such as `name` or `name#1234`.
    pub tag: String,
    /// Avatar URL, falling back to Discord's default avatar.
    pub avatar_url: String,
    /// Account creation time, derived from the user id.
    pub created_at: DateTime<Utc>,
    /// When the member joined the guild, if known.
    pub joined_at: Option<DateTime<Utc>>,
    /// Roles held by the member, excluding `@everyone`.
    pub role_ids: Vec<u64>,
}

impl MemberProfile {
    /// Builds a profile from a user without guild membership details.
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.get(),
            tag: user.tag(),
            avatar_url: user.face(),
            created_at: user.created_at().to_utc(),
            joined_at: None,
            role_ids: Vec::new(),
        }
    }

    /// Builds a profile from a guild member.
    pub fn from_member(member: &Member) -> Self {
        Self {
            joined_at: member.joined_at.map(|joined| joined.to_utc()),
            role_ids: member.roles.iter().map(|role| role.get()).collect(),
            ..Self::from_user(&member.user)
        }
    }

    /// Mention markup for the member.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_user;

    #[test]
    fn builds_profile_from_user() {
        let user = create_test_user(175928847299117063, "alice");

        let profile = MemberProfile::from_user(&user);

        assert_eq!(profile.user_id, 175928847299117063);
        assert_eq!(profile.tag, "alice");
        assert_eq!(profile.mention(), "<@175928847299117063>");
        assert_eq!(profile.created_at.timestamp(), 1462015105);
        assert!(profile.joined_at.is_none());
        assert!(profile.role_ids.is_empty());
    }
}
