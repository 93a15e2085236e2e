//! In-memory cache of guild invites and their last known use counts.
//!
//! The store is the snapshot that join attribution diffs against. It is rebuilt from
//! the platform whenever a guild becomes available and kept current by invite create
//! and delete events.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    model::invite::{Invite, JoinAttribution},
    service::discord::InviteSource,
};

/// Shared handle to the invite snapshot, keyed by invite code.
///
/// Cloning the store clones the handle; every clone sees the same invites.
#[derive(Clone, Default)]
pub struct InviteStore {
    invites: Arc<RwLock<HashMap<String, Invite>>>,
}

impl InviteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an invite, overwriting any record with the same code.
    pub async fn add(&self, invite: Invite) {
        self.invites
            .write()
            .await
            .insert(invite.code.clone(), invite);
    }

    /// Replaces an existing invite record.
    ///
    /// # Returns
    /// - `Ok(())` - Record replaced
    /// - `Err(AppError::NotFound)` - No invite with this code is stored
    pub async fn update(&self, invite: Invite) -> Result<(), AppError> {
        let mut invites = self.invites.write().await;

        match invites.get_mut(&invite.code) {
            Some(existing) => {
                *existing = invite;
                Ok(())
            }
            None => Err(not_found(&invite.code)),
        }
    }

    /// Removes an invite by code.
    ///
    /// # Returns
    /// - `Ok(Invite)` - The removed record
    /// - `Err(AppError::NotFound)` - No invite with this code is stored
    pub async fn remove(&self, code: &str) -> Result<Invite, AppError> {
        self.invites
            .write()
            .await
            .remove(code)
            .ok_or_else(|| not_found(code))
    }

    /// Gets a copy of an invite by code.
    ///
    /// # Returns
    /// - `Ok(Invite)` - The stored record
    /// - `Err(AppError::NotFound)` - No invite with this code is stored
    pub async fn get(&self, code: &str) -> Result<Invite, AppError> {
        self.invites
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or_else(|| not_found(code))
    }

    /// Adds every invite, overwriting records with matching codes.
    pub async fn add_all(&self, invites: impl IntoIterator<Item = Invite>) {
        let mut stored = self.invites.write().await;

        for invite in invites {
            stored.insert(invite.code.clone(), invite);
        }
    }

    /// Seeds the store with a guild's current invites.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of invites added
    /// - `Err(AppError)` - Invite listing failed; the store is unchanged
    pub async fn add_all_for_guild(
        &self,
        guild_id: u64,
        source: &dyn InviteSource,
    ) -> Result<usize, AppError> {
        let invites = source.guild_invites(guild_id).await?;
        let count = invites.len();

        self.add_all(invites).await;

        Ok(count)
    }

    /// Drops every stored invite belonging to a guild.
    ///
    /// Works from the stored guild ids alone, so it can run after the bot has lost
    /// access to the guild.
    ///
    /// # Returns
    /// - `usize` - Number of invites removed
    pub async fn remove_all_for_guild(&self, guild_id: u64) -> usize {
        let mut invites = self.invites.write().await;
        let before = invites.len();

        invites.retain(|_, invite| invite.guild_id != guild_id);

        before - invites.len()
    }

    /// Diffs a guild's current invites against the snapshot and records the change.
    ///
    /// The first invite, in the given order, whose use count is higher than its stored
    /// count is the attributed invite and its stored record is replaced. Invites with
    /// no stored record are compared against zero uses and seeded into the store. When
    /// nothing increased the join came through the vanity URL and known records are left
    /// as they were.
    ///
    /// The comparison and the update happen under one write lock.
    ///
    /// # Arguments
    /// - `current` - Invites as currently reported by the platform
    ///
    /// # Returns
    /// - `JoinAttribution::Invite` - The invite whose count increased, with its new count
    /// - `JoinAttribution::VanityUrl` - No tracked invite changed
    pub async fn apply_snapshot(&self, current: Vec<Invite>) -> JoinAttribution {
        let mut invites = self.invites.write().await;
        let mut attribution = JoinAttribution::VanityUrl;

        for invite in current {
            let previous = invites.get(&invite.code).map(|stored| stored.uses);
            let increased = invite.uses > previous.unwrap_or(0);

            if increased && attribution == JoinAttribution::VanityUrl {
                attribution = JoinAttribution::Invite(invite.clone());
                invites.insert(invite.code.clone(), invite);
            } else if previous.is_none() {
                invites.insert(invite.code.clone(), invite);
            }
        }

        attribution
    }

    /// Number of stored invites.
    pub async fn len(&self) -> usize {
        self.invites.read().await.len()
    }

    /// Whether the store holds no invites.
    pub async fn is_empty(&self) -> bool {
        self.invites.read().await.is_empty()
    }
}

fn not_found(code: &str) -> AppError {
    AppError::NotFound(format!("No invite found with code {}", code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fake::{invite, FakeInviteSource};

    #[tokio::test]
    async fn get_returns_added_invite() {
        let store = InviteStore::new();
        let added = invite("12345", 1, 10);

        store.add(added.clone()).await;

        assert_eq!(store.get("12345").await.unwrap(), added);
    }

    #[tokio::test]
    async fn add_overwrites_existing_code() {
        let store = InviteStore::new();

        store.add(invite("12345", 1, 10)).await;
        store.add(invite("12345", 1, 20)).await;

        assert_eq!(store.get("12345").await.unwrap().uses, 20);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_replaces_existing_invite() {
        let store = InviteStore::new();
        store.add(invite("12345", 1, 10)).await;

        store.update(invite("12345", 1, 20)).await.unwrap();

        assert_eq!(store.get("12345").await.unwrap().uses, 20);
    }

    #[tokio::test]
    async fn update_fails_for_unknown_invite() {
        let store = InviteStore::new();

        let result = store.update(invite("12345", 1, 20)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_deletes_invite() {
        let store = InviteStore::new();
        store.add(invite("12345", 1, 10)).await;

        let removed = store.remove("12345").await.unwrap();

        assert_eq!(removed.code, "12345");
        assert!(matches!(
            store.get("12345").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn remove_fails_for_unknown_invite() {
        let store = InviteStore::new();

        let result = store.remove("12345").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_fails_for_unknown_invite() {
        let store = InviteStore::new();

        assert!(matches!(store.get("nope").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn add_all_for_guild_stores_every_listed_invite() {
        let store = InviteStore::new();
        let source = FakeInviteSource::new()
            .with_guild(1, vec![invite("1", 1, 0), invite("2", 1, 3)])
            .with_guild(2, vec![invite("3", 2, 0), invite("4", 2, 7)]);

        let added = store.add_all_for_guild(1, &source).await.unwrap();
        store.add_all_for_guild(2, &source).await.unwrap();

        assert_eq!(added, 2);
        for listed in source.invites(1).into_iter().chain(source.invites(2)) {
            assert_eq!(store.get(&listed.code).await.unwrap(), listed);
        }
    }

    #[tokio::test]
    async fn add_all_for_guild_leaves_store_unchanged_on_failure() {
        let store = InviteStore::new();
        store.add(invite("1", 1, 0)).await;
        let source = FakeInviteSource::new().failing();

        let result = store.add_all_for_guild(1, &source).await;

        assert!(result.is_err());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_all_for_guild_keeps_other_guilds() {
        let store = InviteStore::new();
        store
            .add_all(vec![
                invite("1", 1, 0),
                invite("2", 1, 0),
                invite("3", 2, 0),
            ])
            .await;

        let removed = store.remove_all_for_guild(1).await;

        assert_eq!(removed, 2);
        assert!(store.get("1").await.is_err());
        assert!(store.get("2").await.is_err());
        assert!(store.get("3").await.is_ok());
    }

    #[tokio::test]
    async fn remove_all_for_unknown_guild_is_a_no_op() {
        let store = InviteStore::new();
        store.add(invite("1", 1, 0)).await;

        assert_eq!(store.remove_all_for_guild(9).await, 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn apply_snapshot_attributes_first_increased_invite() {
        let store = InviteStore::new();
        store
            .add_all(vec![invite("a", 1, 10), invite("b", 1, 5), invite("c", 1, 1)])
            .await;

        let attribution = store
            .apply_snapshot(vec![invite("a", 1, 10), invite("b", 1, 6), invite("c", 1, 2)])
            .await;

        assert_eq!(attribution, JoinAttribution::Invite(invite("b", 1, 6)));
        assert_eq!(store.get("b").await.unwrap().uses, 6);
        assert_eq!(store.get("c").await.unwrap().uses, 1);
    }

    #[tokio::test]
    async fn apply_snapshot_treats_unknown_invite_as_zero_uses() {
        let store = InviteStore::new();

        let attribution = store.apply_snapshot(vec![invite("new", 1, 1)]).await;

        assert_eq!(attribution, JoinAttribution::Invite(invite("new", 1, 1)));
        assert_eq!(store.get("new").await.unwrap().uses, 1);
    }

    #[tokio::test]
    async fn apply_snapshot_seeds_unused_unknown_invites() {
        let store = InviteStore::new();
        store.add(invite("a", 1, 4)).await;

        let attribution = store
            .apply_snapshot(vec![invite("a", 1, 4), invite("fresh", 1, 0)])
            .await;

        assert_eq!(attribution, JoinAttribution::VanityUrl);
        assert_eq!(store.get("fresh").await.unwrap().uses, 0);
    }
}
