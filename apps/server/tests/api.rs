use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use lookout_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

const INSTANCE: &str = "type.googleapis.com/lookout.aws.ec2.v1.Instance";
const INSTANCE_ID: &str = "type.googleapis.com/lookout.resolver.aws.v1.InstanceID";
const AUTOSCALING_GROUP: &str = "type.googleapis.com/lookout.aws.ec2.v1.AutoscalingGroup";
const POD: &str = "type.googleapis.com/lookout.k8s.v1.Pod";

fn test_config(fixture: &str, request_timeout: Duration) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        inventory_path: format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), fixture).into(),
        cors_allow: vec!["*".to_string()],
        request_timeout,
    }
}

async fn build_router(config: Config) -> Router {
    let state = build_state(&config).await.unwrap();
    app_router(state, &config).unwrap()
}

async fn build_test_router() -> Router {
    build_router(test_config("inventory.json", Duration::from_secs(5))).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn healthz_works() {
    let app = build_test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn resolve_across_accounts_reports_partial_failures() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/resolve",
        json!({
            "want": INSTANCE,
            "have": { "@type": INSTANCE_ID, "id": "i-0a1b2c3d4e5f60718" },
            "limit": 0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r["@type"] == INSTANCE));
    let failures = body["partialFailures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["code"], "UNAVAILABLE");
}

#[tokio::test]
async fn resolve_with_limit_drops_failures() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/resolve",
        json!({
            "want": INSTANCE,
            "have": {
                "@type": INSTANCE_ID,
                "id": "i-0a1b2c3d4e5f60718",
                "account": "prod",
                "region": "all"
            },
            "limit": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["results"][0]["value"]["account"], "prod");
    assert!(body["partialFailures"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn resolve_missing_instance_in_healthy_region_is_not_found() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/resolve",
        json!({
            "want": INSTANCE,
            "have": {
                "@type": INSTANCE_ID,
                "id": "i-0000000000000000",
                "account": "prod",
                "region": "us-east-1"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(
        body["message"],
        format!(
            "did not find '{}' with searched schemas '{}'",
            INSTANCE, INSTANCE_ID
        )
    );
}

#[tokio::test]
async fn resolve_in_unavailable_region_fails_precondition() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/resolve",
        json!({
            "want": INSTANCE,
            "have": {
                "@type": INSTANCE_ID,
                "id": "i-0a1b2c3d4e5f60718",
                "account": "prod",
                "region": "eu-west-1"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "FAILED_PRECONDITION");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .ends_with("encountered 1 errors"));
    assert_eq!(body["details"][0]["code"], "UNAVAILABLE");
}

#[tokio::test]
async fn search_by_scoped_query() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/search",
        json!({ "want": AUTOSCALING_GROUP, "query": "staging/us-east-1/web" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["value"]["size"]["desired"], 1);
}

#[tokio::test]
async fn search_with_invalid_query_is_bad_request() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/search",
        json!({ "want": INSTANCE, "query": "definitely not an id" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn search_pods_reports_unreachable_clientset() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/search",
        json!({ "want": POD, "query": "mesh/envoy-7d9c6b5f4-x2x9z" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["results"][0]["value"]["cluster"], "k8s-prod-east");
    assert_eq!(body["partialFailures"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn autocomplete_respects_limit() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/autocomplete",
        json!({ "want": INSTANCE, "search": "i-0", "limit": 2 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0]["id"].as_str().unwrap().contains("/i-0"));
}

#[tokio::test]
async fn get_object_schemas_prepends_all_option() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/getObjectSchemas",
        json!({ "typeUrl": INSTANCE }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["typeUrl"], INSTANCE);
    let schema = &body["schemas"][0];
    assert_eq!(schema["typeUrl"], INSTANCE_ID);
    assert_eq!(schema["autocompleteEnabled"], true);

    let region = schema["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "region")
        .unwrap();
    let options = region["kind"]["options"].as_array().unwrap();
    assert_eq!(options[0], json!({ "displayName": "All", "value": "all" }));
    assert_eq!(options.len(), 4);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/resolve",
        json!({ "want": INSTANCE, "have": { "@type": "type.googleapis.com/unknown" } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");

    let (status, _) = post_json(
        &app,
        "/v1/resolver/search",
        json!({ "want": "", "query": "x" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lookup_deadline_answers_before_http_timeout() {
    let app = build_router(test_config("slow_inventory.json", Duration::from_secs(1))).await;

    let (status, body) = post_json(
        &app,
        "/v1/resolver/resolve",
        json!({
            "want": INSTANCE,
            "have": {
                "@type": INSTANCE_ID,
                "id": "i-0a1b2c3d4e5f60718",
                "account": "prod",
                "region": "us-east-1"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "FAILED_PRECONDITION");
    assert_eq!(body["details"][0]["code"], "DEADLINE_EXCEEDED");
}
