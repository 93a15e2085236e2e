//! Embeds for the bot's own ljlog channel.

use serenity::all::{CreateEmbed, Timestamp};

use crate::model::invite::Invite;

const INVITE_CREATE_COLOR: u32 = 0x008000;
const INVITE_DELETE_COLOR: u32 = 0xD90000;
const CONFIG_COLOR: u32 = 0x3498DB;

/// Builds the notice for a newly created invite.
pub fn invite_created(invite: &Invite) -> CreateEmbed {
    let creator = invite
        .inviter
        .as_ref()
        .map(|inviter| format!("<@{}>", inviter.id))
        .unwrap_or_else(|| "Unknown".to_string());

    CreateEmbed::new()
        .title("**Invite Created**")
        .color(INVITE_CREATE_COLOR)
        .description(format!(
            "**Invite:** {}\n**Created By:** {}",
            invite.url, creator
        ))
        .timestamp(Timestamp::now())
}

/// Builds the notice for a deleted invite, with its final use count when it was tracked.
pub fn invite_deleted(code: &str, last_known: Option<&Invite>) -> CreateEmbed {
    let mut description = format!("**Invite:** {}", Invite::url_for_code(code));
    if let Some(invite) = last_known {
        description.push_str(&format!("\n**Uses:** {}", invite.uses));
    }

    CreateEmbed::new()
        .title("**Invite Deleted**")
        .color(INVITE_DELETE_COLOR)
        .description(description)
        .timestamp(Timestamp::now())
}

/// Builds the notice for a log channel change made through a command.
///
/// # Arguments
/// - `label` - Label of the changed category, e.g. `"Bulk Delete"`
/// - `channel_id` - New destination, `None` when the category was disabled
/// - `moderator_id` - User who ran the command
pub fn log_channel_changed(label: &str, channel_id: Option<u64>, moderator_id: u64) -> CreateEmbed {
    let change = match channel_id {
        Some(channel_id) => format!("**{}** logs now appear in <#{}>", label, channel_id),
        None => format!("**{}** logs disabled", label),
    };

    CreateEmbed::new()
        .title("**Log Configuration Changed**")
        .color(CONFIG_COLOR)
        .description(format!("{}\n**Changed By:** <@{}>", change, moderator_id))
        .timestamp(Timestamp::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::invite::Inviter;

    #[test]
    fn invite_created_names_creator() {
        let invite = Invite {
            code: "abc".to_string(),
            guild_id: 1,
            uses: 0,
            url: Invite::url_for_code("abc"),
            inviter: Some(Inviter {
                id: 5,
                tag: "dave".to_string(),
            }),
        };

        let json = serde_json::to_value(invite_created(&invite)).unwrap();
        let description = json["description"].as_str().unwrap();

        assert!(description.contains("https://discord.gg/abc"));
        assert!(description.contains("<@5>"));
    }

    #[test]
    fn invite_deleted_includes_uses_when_known() {
        let invite = Invite {
            code: "abc".to_string(),
            guild_id: 1,
            uses: 4,
            url: Invite::url_for_code("abc"),
            inviter: None,
        };

        let known = serde_json::to_value(invite_deleted("abc", Some(&invite))).unwrap();
        let unknown = serde_json::to_value(invite_deleted("abc", None)).unwrap();

        assert!(known["description"].as_str().unwrap().contains("**Uses:** 4"));
        assert!(!unknown["description"].as_str().unwrap().contains("Uses"));
    }

    #[test]
    fn log_channel_changed_describes_disable() {
        let json = serde_json::to_value(log_channel_changed("Edit", None, 9)).unwrap();

        assert!(json["description"]
            .as_str()
            .unwrap()
            .contains("**Edit** logs disabled"));
    }
}
