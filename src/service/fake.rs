//! In-memory stand-ins for the platform traits.

use std::collections::HashMap;
use std::sync::Mutex;

use serenity::async_trait;

use crate::{
    error::AppError,
    model::invite::{Invite, Inviter},
    service::discord::{InviteSource, MessageRemover, RemoteDelete},
};

/// Builds an invite created by user 1000.
pub fn invite(code: &str, guild_id: u64, uses: u64) -> Invite {
    Invite {
        code: code.to_string(),
        guild_id,
        uses,
        url: Invite::url_for_code(code),
        inviter: Some(Inviter {
            id: 1000,
            tag: "inviter".to_string(),
        }),
    }
}

/// Invite source returning fixed invite lists per guild.
#[derive(Default)]
pub struct FakeInviteSource {
    guilds: HashMap<u64, Vec<Invite>>,
    fail: bool,
}

impl FakeInviteSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guild(mut self, guild_id: u64, invites: Vec<Invite>) -> Self {
        self.guilds.insert(guild_id, invites);
        self
    }

    /// Makes every listing fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn invites(&self, guild_id: u64) -> Vec<Invite> {
        self.guilds.get(&guild_id).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl InviteSource for FakeInviteSource {
    async fn guild_invites(&self, guild_id: u64) -> Result<Vec<Invite>, AppError> {
        if self.fail {
            return Err(AppError::NotFound(format!("Guild {} unavailable", guild_id)));
        }

        Ok(self.invites(guild_id))
    }
}

/// How the fake remover answers for a message.
#[derive(Debug, Clone, Copy)]
pub enum RemoveOutcome {
    Deleted,
    AlreadyGone,
    Fail,
}

/// Message remover that records every call.
#[derive(Default)]
pub struct FakeMessageRemover {
    outcomes: HashMap<u64, RemoveOutcome>,
    calls: Mutex<Vec<(u64, u64)>>,
}

impl FakeMessageRemover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the outcome for a message id; unlisted messages are deleted.
    pub fn with_outcome(mut self, message_id: u64, outcome: RemoveOutcome) -> Self {
        self.outcomes.insert(message_id, outcome);
        self
    }

    /// `(channel_id, message_id)` pairs passed to `remove_message`, in call order.
    pub fn calls(&self) -> Vec<(u64, u64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRemover for FakeMessageRemover {
    async fn remove_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<RemoteDelete, AppError> {
        self.calls.lock().unwrap().push((channel_id, message_id));

        match self
            .outcomes
            .get(&message_id)
            .copied()
            .unwrap_or(RemoveOutcome::Deleted)
        {
            RemoveOutcome::Deleted => Ok(RemoteDelete::Deleted),
            RemoveOutcome::AlreadyGone => Ok(RemoteDelete::AlreadyGone),
            RemoveOutcome::Fail => Err(AppError::NotFound(format!(
                "Missing access to channel {}",
                channel_id
            ))),
        }
    }
}
