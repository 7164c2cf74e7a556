use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::use_cases::list_lybs::projection::LybView;
use crate::shared::core::primitives::format_rfc3339;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Lyb")]
pub struct GqlLyb {
    pub id: ID,
    pub title: String,
    pub author: String,
    pub content: String,
    pub posttime: String,
}

impl From<LybView> for GqlLyb {
    fn from(v: LybView) -> Self {
        Self {
            id: ID(v.lyb_id),
            title: v.title,
            author: v.author,
            content: v.content,
            posttime: format_rfc3339(v.posttime),
        }
    }
}

#[derive(Default)]
pub struct ListLybsQuery;

#[Object]
impl ListLybsQuery {
    /// Lybs ordered by post time, newest first.
    async fn lybs(
        &self,
        context: &Context<'_>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlLyb>> {
        let state = context.data_unchecked::<AppState>();
        let limit = state.page_limit(limit.map(|l| l.max(0) as u64));
        let list = state
            .queries
            .list(offset.unwrap_or(0).max(0) as u64, limit)
            .await
            .map_err(|e| ApiError::from(e).into_graphql())?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
