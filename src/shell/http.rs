use axum::{Extension, Router, routing::get};

use crate::modules::lybs::use_cases::delete_lyb::inbound::http as delete_http;
use crate::modules::lybs::use_cases::get_lyb::inbound::http as get_http;
use crate::modules::lybs::use_cases::list_lybs::inbound::http as list_http;
use crate::modules::lybs::use_cases::post_lyb::inbound::http as post_http;
use crate::modules::lybs::use_cases::update_lyb::inbound::http as update_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/lybs", get(list_http::handle).post(post_http::handle))
        .route(
            "/lybs/{id}",
            get(get_http::handle)
                .put(update_http::handle_put)
                .patch(update_http::handle_patch)
                .delete(delete_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}
