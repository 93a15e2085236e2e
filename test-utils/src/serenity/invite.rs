//! Test factory for creating Serenity RichInvite objects.
//!
//! `RichInvite` is the shape returned when listing a guild's invites, which is what the
//! bot snapshots when attributing joins.

use serenity::all::{RichInvite, User};

/// Creates a test Serenity RichInvite.
///
/// # Arguments
/// - `code` - Invite code
/// - `uses` - Number of times the invite has been redeemed
/// - `inviter` - Optional user who created the invite
///
/// # Panics
/// - If the JSON cannot be deserialized into a RichInvite (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_invite, create_test_user};
///
/// let invite = create_test_invite("abc", 3, Some(create_test_user(1, "alice")));
/// assert_eq!(invite.uses, 3);
/// ```
pub fn create_test_invite(code: &str, uses: u64, inviter: Option<User>) -> RichInvite {
    serde_json::from_value(serde_json::json!({
        "channel": {
            "id": "200000000000000000",
            "name": "general",
            "type": 0,
        },
        "code": code,
        "created_at": "2025-01-01T00:00:00.000000+00:00",
        "guild": null,
        "inviter": inviter,
        "max_age": 0,
        "max_uses": 0,
        "temporary": false,
        "uses": uses,
    }))
    .expect("Failed to create test invite")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serenity::create_test_user;

    #[test]
    fn creates_invite_with_inviter() {
        let invite = create_test_invite("abc", 10, Some(create_test_user(7, "alice")));

        assert_eq!(invite.code, "abc");
        assert_eq!(invite.uses, 10);
        assert_eq!(invite.inviter.map(|u| u.id.get()), Some(7));
    }

    #[test]
    fn creates_invite_without_inviter() {
        let invite = create_test_invite("xyz", 0, None);

        assert!(invite.inviter.is_none());
    }
}
