use crate::modules::lybs::use_cases::list_lybs::projection::LybView;
use async_trait::async_trait;

/// Read access to the Lyb projection.
///
/// `list` returns rows newest first by `posttime`, ties broken by `lyb_id` descending.
/// A `limit` of `None` returns everything after `offset`.
#[async_trait]
pub trait LybQueries {
    async fn list(&self, offset: u64, limit: Option<u64>) -> anyhow::Result<Vec<LybView>>;
    async fn find_by_id(&self, lyb_id: &str) -> anyhow::Result<Option<LybView>>;
}
