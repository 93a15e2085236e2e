//! Embeds for membership events.

use chrono::{DateTime, Duration, Utc};
use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Timestamp};

use crate::model::{invite::JoinAttribution, member::MemberProfile};

use super::{describe_duration, format_date};

/// Accounts younger than this many days are flagged on join.
pub const NEW_ACCOUNT_DAYS: i64 = 7;

const NEW_ACCOUNT_COLOR: u32 = 0xFFC704;
const JOIN_COLOR: u32 = 0x008000;
const LEAVE_COLOR: u32 = 0xD90000;
const NAME_CHANGE_COLOR: u32 = 0x22FFC2;
const AVATAR_CHANGE_COLOR: u32 = 0x8000FF;

fn base_embed(member: &MemberProfile, title: &str, color: u32) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .color(color)
        .author(CreateEmbedAuthor::new(format!(
            "{} ({})",
            member.tag, member.user_id
        )))
        .timestamp(Timestamp::now())
}

fn with_member_count(embed: CreateEmbed, member_count: Option<u64>) -> CreateEmbed {
    match member_count {
        Some(count) => embed.footer(CreateEmbedFooter::new(format!("Total Members: {}", count))),
        None => embed,
    }
}

/// Builds the join log embed.
///
/// # Arguments
/// - `member` - The member who joined
/// - `attribution` - Invite the join was attributed to
/// - `member_count` - Guild member count after the join, if known
/// - `now` - Current time, used for the account age
pub fn member_joined(
    member: &MemberProfile,
    attribution: &JoinAttribution,
    member_count: Option<u64>,
    now: DateTime<Utc>,
) -> CreateEmbed {
    let account_age = now - member.created_at;
    let is_new = account_age < Duration::days(NEW_ACCOUNT_DAYS);

    let invite_lines = match attribution {
        JoinAttribution::Invite(invite) => format!(
            "**Invite used:** {} ({} uses)\n**Created By:** {}",
            invite.url,
            invite.uses,
            invite
                .inviter
                .as_ref()
                .map(|inviter| inviter.tag.as_str())
                .unwrap_or("Unknown")
        ),
        JoinAttribution::VanityUrl => "**Invite used:** Vanity URL".to_string(),
    };

    let description = format!(
        "**Name:** {}\n**Created on:** {}\n**Account age:** {} days old\n{}",
        member.mention(),
        format_date(member.created_at),
        account_age.num_days(),
        invite_lines
    );

    let color = if is_new { NEW_ACCOUNT_COLOR } else { JOIN_COLOR };
    let mut embed = base_embed(member, "**User Joined**", color)
        .description(description)
        .thumbnail(&member.avatar_url);

    if is_new {
        embed = embed.field(
            "**New Account**",
            format!("Created {} ago", describe_duration(account_age)),
            false,
        );
    }

    with_member_count(embed, member_count)
}

/// Builds the leave log embed.
///
/// # Arguments
/// - `member` - The member who left; join date and roles are shown when known
/// - `member_count` - Guild member count after the leave, if known
/// - `now` - Current time, used for account age and time on the server
pub fn member_left(
    member: &MemberProfile,
    member_count: Option<u64>,
    now: DateTime<Utc>,
) -> CreateEmbed {
    let joined = match member.joined_at {
        Some(joined_at) => format!(
            "{} ({} days ago)",
            format_date(joined_at),
            (now - joined_at).num_days()
        ),
        None => "Unknown".to_string(),
    };

    let description = format!(
        "**Name:** {}\n**Created on:** {}\n**Account age:** {} days old\n**Joined on:** {}",
        member.mention(),
        format_date(member.created_at),
        (now - member.created_at).num_days(),
        joined
    );

    let roles = if member.role_ids.is_empty() {
        "None".to_string()
    } else {
        member
            .role_ids
            .iter()
            .map(|id| format!("<@&{}>", id))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let embed = base_embed(member, "**User Left**", LEAVE_COLOR)
        .description(description)
        .thumbnail(&member.avatar_url)
        .field(format!("**Roles[{}]**", member.role_ids.len()), roles, false);

    with_member_count(embed, member_count)
}

/// Builds the nickname change embed. A missing nickname is shown as `None`.
pub fn nickname_changed(
    member: &MemberProfile,
    before: Option<&str>,
    after: Option<&str>,
) -> CreateEmbed {
    base_embed(member, "**User Nickname Updated**", NAME_CHANGE_COLOR)
        .description(format!(
            "**User:** {}\n\n**Before:** {}\n**After:** {}",
            member.mention(),
            before.unwrap_or("None"),
            after.unwrap_or("None")
        ))
        .thumbnail(&member.avatar_url)
}

/// Builds the username change embed.
pub fn username_changed(member: &MemberProfile, before: &str, after: &str) -> CreateEmbed {
    base_embed(member, "**Username Updated**", NAME_CHANGE_COLOR)
        .description(format!(
            "**User:** {}\n\n**Before:** {}\n**After:** {}",
            member.mention(),
            before,
            after
        ))
        .thumbnail(&member.avatar_url)
}

/// Builds the avatar change embed, old avatar as thumbnail and new avatar as image.
pub fn avatar_changed(member: &MemberProfile, old_avatar_url: &str) -> CreateEmbed {
    base_embed(member, "**User Avatar Updated**", AVATAR_CHANGE_COLOR)
        .description(format!(
            "**User:** {}\n\nOld avatar in thumbnail. New avatar down below",
            member.mention()
        ))
        .thumbnail(old_avatar_url)
        .image(&member.avatar_url)
}
