use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::lybs::use_cases::delete_lyb::inbound::graphql::DeleteLybMutation;
use crate::modules::lybs::use_cases::get_lyb::inbound::graphql::GetLybQuery;
use crate::modules::lybs::use_cases::list_lybs::inbound::graphql::ListLybsQuery;
use crate::modules::lybs::use_cases::post_lyb::inbound::graphql::PostLybMutation;
use crate::modules::lybs::use_cases::update_lyb::inbound::graphql::UpdateLybMutation;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListLybsQuery, GetLybQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(PostLybMutation, UpdateLybMutation, DeleteLybMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
