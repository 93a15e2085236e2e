//! Domain models for guild invites.
//!
//! Invites are cached in memory by the invite store and compared against the
//! platform's current counts to work out which invite a new member used.

use serenity::all::RichInvite;

/// The user who created an invite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inviter {
    /// Discord user ID.
    pub id: u64,
    /// Display tag such as `name` or `name#1234`.
    pub tag: String,
}

/// Last known state of a guild invite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    /// Invite code, unique across Discord.
    pub code: String,
    /// Guild the invite admits members to.
    pub guild_id: u64,
    /// Number of times the invite has been used.
    pub uses: u64,
    /// Shareable invite URL.
    pub url: String,
    /// Creator of the invite, absent for widget or system invites.
    pub inviter: Option<Inviter>,
}

impl Invite {
    /// Builds the shareable URL for an invite code.
    pub fn url_for_code(code: &str) -> String {
        format!("https://discord.gg/{}", code)
    }

    /// Converts a Serenity invite at the platform boundary.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the invite was fetched from
    /// - `invite` - Invite as returned by Discord's guild invite listing
    ///
    /// # Returns
    /// - `Invite` - Domain model with the invite's current use count
    pub fn from_rich_invite(guild_id: u64, invite: RichInvite) -> Self {
        Self {
            url: Self::url_for_code(&invite.code),
            code: invite.code,
            guild_id,
            uses: invite.uses,
            inviter: invite.inviter.map(|user| Inviter {
                id: user.id.get(),
                tag: user.tag(),
            }),
        }
    }
}

/// Outcome of matching a member join against the invite snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinAttribution {
    /// An individually tracked invite's use count increased.
    Invite(Invite),
    /// No tracked invite changed, so the member came through the vanity URL.
    VanityUrl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_invite, create_test_user};

    #[test]
    fn converts_rich_invite_with_inviter() {
        let rich = create_test_invite("abc123", 10, Some(create_test_user(7, "alice")));

        let invite = Invite::from_rich_invite(1, rich);

        assert_eq!(invite.code, "abc123");
        assert_eq!(invite.guild_id, 1);
        assert_eq!(invite.uses, 10);
        assert_eq!(invite.url, "https://discord.gg/abc123");
        assert_eq!(
            invite.inviter,
            Some(Inviter {
                id: 7,
                tag: "alice".to_string(),
            })
        );
    }

    #[test]
    fn converts_rich_invite_without_inviter() {
        let invite = Invite::from_rich_invite(1, create_test_invite("xyz", 0, None));

        assert!(invite.inviter.is_none());
    }
}
