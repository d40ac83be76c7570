use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use website::database::ActivityStore;
use website::web;

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn test_app() -> (Router, Arc<ActivityStore>) {
    website::logging::init();
    let store = Arc::new(ActivityStore::seeded());
    (web::build_router(Arc::clone(&store), static_dir()), store)
}

pub async fn send(app: &Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_json(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = send(app, method, uri).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn signup_uri(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        activity.replace(' ', "%20"),
        email.replace('@', "%40")
    )
}
