// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use tower::util::ServiceExt as _;
use tree_menu::application::ports::{routes::RouteResolver, time::Clock, util::SlugGenerator};
use tree_menu::application::services::ApplicationServices;
use tree_menu::domain::menu::{MenuItemRepository, MenuRepository};
use tree_menu::infrastructure::{routes::StaticRouteTable, util::DefaultSlugGenerator};
use tree_menu::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{FixedClock, InMemoryStore};

pub const TEST_ROUTES: &str = "home=/,about=/about/,contact=/contact/";

pub fn build_services(store: &InMemoryStore) -> ApplicationServices {
    let menu_repo: Arc<dyn MenuRepository> = Arc::new(store.clone());
    let item_repo: Arc<dyn MenuItemRepository> = Arc::new(store.clone());
    let routes: Arc<dyn RouteResolver> = Arc::new(StaticRouteTable::parse(TEST_ROUTES).unwrap());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(menu_repo, item_repo, routes, clock, slugger)
}

pub fn make_test_router() -> (axum::Router, InMemoryStore) {
    let store = InMemoryStore::new();
    let state = HttpState {
        services: Arc::new(build_services(&store)),
    };
    (build_router(state, &[]), store)
}

/// Sends a request and returns the status with the decoded JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Asserts an `ErrorResponse` body with the given status and item rule kind.
pub fn assert_rule_violation(status: StatusCode, body: &Value, kind: &str) {
    assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["kind"], kind, "body: {body}");
    assert!(
        body["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message: {body}"
    );
}
