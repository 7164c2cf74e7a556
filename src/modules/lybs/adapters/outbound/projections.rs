use crate::modules::lybs::use_cases::list_lybs::projection::{LybRow, LybRowPatch};
use async_trait::async_trait;

/// Row store behind the projector.
///
/// Mutations carry the stream version that produced them. A mutation whose
/// version is not newer than what the store already holds for that lyb, removed
/// rows included, is skipped and reported as `Ok(false)`. So is a patch for a
/// row that was never projected.
#[async_trait]
pub trait LybProjectionRepository: Send + Sync {
    async fn upsert(&self, row: LybRow) -> anyhow::Result<bool>;
    async fn patch(&self, patch: LybRowPatch) -> anyhow::Result<bool>;
    async fn remove(&self, lyb_id: &str, version: i64) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
