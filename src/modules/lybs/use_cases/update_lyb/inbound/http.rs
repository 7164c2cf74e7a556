use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::modules::lybs::adapters::inbound::errors::ApiError;
use crate::modules::lybs::adapters::inbound::serializer::{
    LybInput, LybRepresentation, parse_lyb_id,
};
use crate::modules::lybs::use_cases::update_lyb::command::{LybChanges, UpdateLyb};
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

/// PUT: every writable field is required.
pub async fn handle_put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<LybInput>, JsonRejection>,
) -> Result<Json<LybRepresentation>, ApiError> {
    let lyb_id = parse_lyb_id(&id)?;
    let Json(body) = body?;
    let fields = body.require_all().map_err(ApiError::Invalid)?;
    update(state, lyb_id, fields.into()).await
}

/// PATCH: only the fields sent are changed.
pub async fn handle_patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<LybInput>, JsonRejection>,
) -> Result<Json<LybRepresentation>, ApiError> {
    let lyb_id = parse_lyb_id(&id)?;
    let Json(body) = body?;
    let changes = body.into_changes().map_err(ApiError::Invalid)?;
    update(state, lyb_id, changes).await
}

async fn update(
    state: AppState,
    lyb_id: String,
    changes: LybChanges,
) -> Result<Json<LybRepresentation>, ApiError> {
    let command = UpdateLyb {
        lyb_id: lyb_id.clone(),
        changes,
        updated_at: now_millis(),
    };
    let _write = state.write_lock.lock().await;
    let appended = state.update_handler.handle(command).await?;
    state.projector.apply_appended(&appended).await?;

    let view = state
        .queries
        .find_by_id(&lyb_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(view.into()))
}

#[cfg(test)]
mod update_lyb_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::shell::state::AppState;

    use super::{handle_patch, handle_put};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/lybs/{id}", put(handle_put).patch(handle_patch))
            .with_state(state)
    }

    fn json_request(method: Method, uri: String, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_404_when_putting_an_unknown_lyb() {
        let response = app(AppState::in_memory(100))
            .oneshot(json_request(
                Method::PUT,
                format!("/lybs/{}", Uuid::now_v7()),
                r#"{"title":"a","author":"b","content":"c"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_400_when_put_misses_fields() {
        let response = app(AppState::in_memory(100))
            .oneshot(json_request(
                Method::PUT,
                format!("/lybs/{}", Uuid::now_v7()),
                r#"{"title":"a"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["author"], serde_json::json!(["This field is required."]));
    }

    #[tokio::test]
    async fn it_should_return_404_when_patching_an_unknown_lyb() {
        let response = app(AppState::in_memory(100))
            .oneshot(json_request(
                Method::PATCH,
                format!("/lybs/{}", Uuid::now_v7()),
                r#"{"title":"a"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
