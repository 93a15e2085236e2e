//! Works out which invite a new member joined through.
//!
//! Discord does not say which invite a member used, so the guild's invites are
//! fetched on every join and their use counts compared against the invite store.

use crate::{
    error::AppError,
    model::invite::JoinAttribution,
    service::{discord::InviteSource, invite_store::InviteStore},
};

pub struct InviteAttributionService<'a> {
    invites: &'a InviteStore,
    source: &'a dyn InviteSource,
}

impl<'a> InviteAttributionService<'a> {
    /// Creates a new InviteAttributionService instance.
    ///
    /// # Arguments
    /// - `invites` - Snapshot of last known invite use counts
    /// - `source` - Platform access for listing the guild's current invites
    pub fn new(invites: &'a InviteStore, source: &'a dyn InviteSource) -> Self {
        Self { invites, source }
    }

    /// Attributes a member join in a guild to an invite.
    ///
    /// On a match the store is updated to the invite's new use count, so the next join
    /// is compared against it.
    ///
    /// # Returns
    /// - `Ok(JoinAttribution::Invite)` - Invite whose use count increased
    /// - `Ok(JoinAttribution::VanityUrl)` - No invite changed; the store is left as it was
    /// - `Err(AppError)` - The guild's invites could not be listed
    pub async fn attribute_join(&self, guild_id: u64) -> Result<JoinAttribution, AppError> {
        let current = self.source.guild_invites(guild_id).await?;

        Ok(self.invites.apply_snapshot(current).await)
    }
}
