//! Sweeping of expired lumberjack messages.
//!
//! Internal notices posted to a guild's ljlog channel are tracked in the
//! `lumberjack_messages` table and deleted once they are older than the retention
//! window. Sweeps are triggered by message delete events.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::lumberjack_message::LumberjackMessageRepository,
    error::AppError,
    service::discord::{MessageRemover, RemoteDelete},
};

/// How long lumberjack messages are kept, in days.
pub const RETENTION_DAYS: i64 = 7;

/// Outcome counts of a single sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Remote messages deleted.
    pub deleted: usize,
    /// Remote messages that no longer existed.
    pub already_gone: usize,
    /// Remote deletions that failed for another reason.
    pub failed: usize,
}

impl SweepReport {
    /// Number of tracked rows removed by the sweep.
    pub fn total(&self) -> usize {
        self.deleted + self.already_gone + self.failed
    }
}

pub struct MessageRetentionService<'a> {
    db: &'a DatabaseConnection,
    remover: &'a dyn MessageRemover,
}

impl<'a> MessageRetentionService<'a> {
    /// Creates a new MessageRetentionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `remover` - Platform access for deleting the posted messages
    pub fn new(db: &'a DatabaseConnection, remover: &'a dyn MessageRemover) -> Self {
        Self { db, remover }
    }

    /// Deletes every tracked message older than the retention window.
    ///
    /// Each remote message is deleted before its row is removed. A message that is
    /// already gone is not an error. Any other delete failure is logged and the row is
    /// removed anyway, so a message that cannot be deleted is only attempted once.
    ///
    /// # Arguments
    /// - `now` - Current time; rows created before `now - 7 days` are swept
    ///
    /// # Returns
    /// - `Ok(SweepReport)` - Counts per remote outcome
    /// - `Err(AppError)` - Database error reading or removing tracked rows
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<SweepReport, AppError> {
        let repo = LumberjackMessageRepository::new(self.db);
        let cutoff = now - Duration::days(RETENTION_DAYS);
        let mut report = SweepReport::default();

        for message in repo.get_older_than(cutoff).await? {
            match self
                .remover
                .remove_message(message.channel_id, message.message_id)
                .await
            {
                Ok(RemoteDelete::Deleted) => report.deleted += 1,
                Ok(RemoteDelete::AlreadyGone) => report.already_gone += 1,
                Err(e) => {
                    tracing::warn!(
                        "Failed to delete lumberjack message {} in channel {}: {}",
                        message.message_id,
                        message.channel_id,
                        e
                    );
                    report.failed += 1;
                }
            }

            repo.delete(message.message_id).await?;
        }

        if report.total() > 0 {
            tracing::debug!(
                "Swept {} lumberjack messages ({} deleted, {} already gone, {} failed)",
                report.total(),
                report.deleted,
                report.already_gone,
                report.failed
            );
        }

        Ok(report)
    }
}
