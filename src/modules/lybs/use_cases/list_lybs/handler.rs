// Projector: applies appended events to the read model and advances its watermark.

use crate::modules::lybs::adapters::outbound::projections::{
    LybProjectionRepository, WatermarkRepository,
};
use crate::modules::lybs::core::events::LybEvent;
use crate::modules::lybs::core::projections::{Mutation, apply};
use crate::modules::lybs::use_cases::execute::Appended;
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: LybProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: LybProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    /// Applies one event. Events older than what the store already holds for the
    /// lyb are skipped and leave the watermark where it is.
    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &LybEvent,
    ) -> anyhow::Result<()> {
        let mut applied = false;
        for mutation in apply(stream_id, version, event) {
            applied |= match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Patch(patch) => self.repository.patch(patch).await?,
                Mutation::Remove { lyb_id, version } => {
                    self.repository.remove(&lyb_id, version).await?
                }
            };
        }
        if !applied {
            tracing::debug!(
                projector = %self.name,
                stream_id,
                version,
                "skipped stale event"
            );
            return Ok(());
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }

    /// Projects the events of one successful append, numbering them from the
    /// version the append started at.
    pub async fn apply_appended(&self, appended: &Appended) -> anyhow::Result<()> {
        for (offset, event) in appended.events.iter().enumerate() {
            let version = appended.starting_version + offset as i64 + 1;
            self.apply_one(&appended.stream_id, version, event).await?;
        }
        tracing::debug!(
            projector = %self.name,
            stream_id = %appended.stream_id,
            events = appended.events.len(),
            "projected appended events"
        );
        Ok(())
    }
}
