use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post(app: &Router, title: &str) -> Value {
    let response = send(
        app,
        Method::POST,
        "/lybs",
        Some(json!({ "title": title, "author": "Ada", "content": "Body" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn created_lybs_can_be_retrieved() {
    let app = router(AppState::in_memory(100));

    let created = post(&app, "Hello").await;
    let id = created["id"].as_str().unwrap();

    let response = send(&app, Method::GET, &format!("/lybs/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn listing_is_newest_first() {
    let app = router(AppState::in_memory(100));

    let first = post(&app, "first").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = post(&app, "second").await;

    let response = send(&app, Method::GET, "/lybs", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list, json!([second, first]));
}

#[tokio::test]
async fn listing_without_limit_returns_every_lyb() {
    let app = router(AppState::in_memory(3));
    for n in 0..5 {
        post(&app, &format!("post {n}")).await;
    }

    let response = send(&app, Method::GET, "/lybs", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 5);

    let response = send(&app, Method::GET, "/lybs?limit=10", None).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);

    let response = send(&app, Method::GET, "/lybs?offset=4", None).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn put_replaces_and_patch_merges() {
    let app = router(AppState::in_memory(100));
    let created = post(&app, "Hello").await;
    let uri = format!("/lybs/{}", created["id"].as_str().unwrap());

    let response = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "title": "Replaced", "author": "Grace", "content": "New body" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let replaced = body_json(response).await;
    assert_eq!(replaced["title"], "Replaced");
    assert_eq!(replaced["author"], "Grace");
    assert_eq!(replaced["posttime"], created["posttime"]);

    let response = send(&app, Method::PATCH, &uri, Some(json!({ "content": "Patched" }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await;
    assert_eq!(patched["title"], "Replaced");
    assert_eq!(patched["content"], "Patched");
    assert_eq!(patched["id"], created["id"]);
}

#[tokio::test]
async fn patch_rejects_blank_values() {
    let app = router(AppState::in_memory(100));
    let created = post(&app, "Hello").await;
    let uri = format!("/lybs/{}", created["id"].as_str().unwrap());

    let response = send(&app, Method::PATCH, &uri, Some(json!({ "title": "  " }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "title": ["This field may not be blank."] })
    );
}

#[tokio::test]
async fn deleted_lybs_are_gone() {
    let app = router(AppState::in_memory(100));
    let created = post(&app, "Hello").await;
    let uri = format!("/lybs/{}", created["id"].as_str().unwrap());

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "detail": "Not found." }));

    let response = send(&app, Method::GET, "/lybs", None).await;
    assert_eq!(body_json(response).await, json!([]));

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::PATCH, &uri, Some(json!({ "title": "x" }))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn graphql_round_trip() {
    let app = router(AppState::in_memory(100));

    let response = send(
        &app,
        Method::POST,
        "/gql",
        Some(json!({
            "query": r#"mutation { postLyb(title: "Hi", author: "Ada", content: "Body") { id title } }"#
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let posted = body_json(response).await;
    let id = posted["data"]["postLyb"]["id"].as_str().unwrap().to_string();
    assert_eq!(posted["data"]["postLyb"]["title"], "Hi");

    let query = format!(r#"{{ lyb(id: "{id}") {{ author }} lybs {{ id }} }}"#);
    let response = send(&app, Method::POST, "/gql", Some(json!({ "query": query }))).await;
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["lyb"]["author"], "Ada");
    assert_eq!(fetched["data"]["lybs"][0]["id"], id.as_str());

    let mutation = format!(r#"mutation {{ deleteLyb(id: "{id}") }}"#);
    let response = send(&app, Method::POST, "/gql", Some(json!({ "query": mutation }))).await;
    assert_eq!(body_json(response).await["data"]["deleteLyb"], true);

    let response = send(&app, Method::POST, "/gql", Some(json!({ "query": mutation }))).await;
    let errors = body_json(response).await;
    assert_eq!(errors["errors"][0]["extensions"]["code"], "NOT_FOUND");
}
