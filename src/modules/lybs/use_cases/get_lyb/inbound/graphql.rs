use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::adapters::inbound::serializer::parse_lyb_id;
use crate::modules::lybs::use_cases::list_lybs::inbound::graphql::GqlLyb;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetLybQuery;

#[Object]
impl GetLybQuery {
    /// A single Lyb, or null when the id names no live record.
    async fn lyb(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlLyb>> {
        let Ok(lyb_id) = parse_lyb_id(&id) else {
            return Ok(None);
        };
        let state = context.data_unchecked::<AppState>();
        let view = state
            .queries
            .find_by_id(&lyb_id)
            .await
            .map_err(|e| ApiError::from(e).into_graphql())?;
        Ok(view.map(Into::into))
    }
}
