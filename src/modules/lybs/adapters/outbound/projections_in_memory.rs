// In memory projection repository, watermark repository and query side.

use crate::modules::lybs::adapters::outbound::projections::{
    LybProjectionRepository, WatermarkRepository,
};
use crate::modules::lybs::use_cases::list_lybs::projection::{LybRow, LybRowPatch, LybView};
use crate::modules::lybs::use_cases::list_lybs::queries_port::LybQueries;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Rows {
    live: HashMap<String, LybRow>,
    // lyb_id -> version of the event that removed the row
    removed: HashMap<String, i64>,
}

impl Rows {
    fn applied_version(&self, lyb_id: &str) -> Option<i64> {
        self.live
            .get(lyb_id)
            .map(|row| row.version)
            .or_else(|| self.removed.get(lyb_id).copied())
    }

    fn is_stale(&self, lyb_id: &str, version: i64) -> bool {
        self.applied_version(lyb_id)
            .is_some_and(|applied| version <= applied)
    }
}

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<Rows>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("{what} repository offline");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LybProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: LybRow) -> anyhow::Result<bool> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        if guard.is_stale(&row.lyb_id, row.version) {
            return Ok(false);
        }
        guard.live.insert(row.lyb_id.clone(), row);
        Ok(true)
    }

    async fn patch(&self, patch: LybRowPatch) -> anyhow::Result<bool> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        match guard.live.get_mut(&patch.lyb_id) {
            Some(row) if patch.version > row.version => {
                patch.apply_to(row);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn remove(&self, lyb_id: &str, version: i64) -> anyhow::Result<bool> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        if guard.is_stale(lyb_id, version) {
            return Ok(false);
        }
        guard.live.remove(lyb_id);
        guard.removed.insert(lyb_id.to_string(), version);
        Ok(true)
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl LybQueries for InMemoryProjections {
    async fn list(&self, offset: u64, limit: Option<u64>) -> anyhow::Result<Vec<LybView>> {
        self.ensure_online("Projections")?;
        let guard = self.rows.read().await;

        let mut items: Vec<&LybRow> = guard.live.values().collect();
        items.sort_by_key(|r| Reverse((r.posttime, r.lyb_id.clone())));

        let take = limit.map_or(usize::MAX, |l| l as usize);
        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(take)
            .cloned()
            .map(LybView::from)
            .collect())
    }

    async fn find_by_id(&self, lyb_id: &str) -> anyhow::Result<Option<LybView>> {
        self.ensure_online("Projections")?;
        Ok(self
            .rows
            .read()
            .await
            .live
            .get(lyb_id)
            .cloned()
            .map(LybView::from))
    }
}
