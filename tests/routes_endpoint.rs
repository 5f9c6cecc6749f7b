//! End-to-end tests for the routing exposure endpoint.

use js_routing::config::exposure::ExposureDocument;
use js_routing::config::schema::{AppConfig, Environment, RouteDefinition};
use js_routing::config::StaticExposureSource;
use js_routing::http::{HttpServer, JsonSerializer};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::net::TcpListener;

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.environment = Environment::Prod;
    config.context.base_url = "/app".to_string();
    config.routes = vec![
        RouteDefinition {
            name: "home".to_string(),
            path: "/".to_string(),
            methods: vec!["GET".to_string()],
            options: BTreeMap::new(),
        },
        RouteDefinition {
            name: "admin".to_string(),
            path: "/admin".to_string(),
            methods: vec!["GET".to_string(), "POST".to_string()],
            options: BTreeMap::new(),
        },
    ];
    config
}

fn exposure_fixture() -> StaticExposureSource {
    let document: ExposureDocument = toml::from_str(
        r#"
        [js_routing.routes_to_expose]
        home = true
        admin = ["staff"]

        [js_routing.cache.default]
        max_age = 600
        public = true
        "#,
    )
    .unwrap();
    StaticExposureSource::new(document.js_routing)
}

async fn spawn_app(config: AppConfig, exposure: StaticExposureSource) -> String {
    let server = HttpServer::with_sources(config, Arc::new(exposure), Arc::new(JsonSerializer));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn get_json(url: &str) -> (reqwest::StatusCode, reqwest::header::HeaderMap, serde_json::Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await.unwrap();
    (status, headers, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn default_group_exposes_only_unconditional_routes() {
    let address = spawn_app(test_config(), exposure_fixture()).await;

    let (status, headers, body) = get_json(&format!("{}/routes", address)).await;
    assert_eq!(status, 200);
    assert_eq!(
        headers.get("content-type").unwrap(),
        "application/javascript"
    );

    let routes = body["routes"].as_object().unwrap();
    assert!(routes.contains_key("home"));
    assert!(!routes.contains_key("admin"));
    assert_eq!(routes["home"]["path"], "/");
}

#[tokio::test]
async fn staff_group_exposes_group_scoped_routes() {
    let address = spawn_app(test_config(), exposure_fixture()).await;

    // Via path segment.
    let (status, _, body) = get_json(&format!("{}/routes/staff", address)).await;
    assert_eq!(status, 200);
    let routes = body["routes"].as_object().unwrap();
    assert!(routes.contains_key("home"));
    assert!(routes.contains_key("admin"));
    assert_eq!(routes["admin"]["methods"], serde_json::json!(["GET", "POST"]));

    // Via query parameter.
    let (_, _, body) = get_json(&format!("{}/routes?group=staff", address)).await;
    assert!(body["routes"].as_object().unwrap().contains_key("admin"));
}

#[tokio::test]
async fn payload_carries_request_derived_context() {
    let address = spawn_app(test_config(), exposure_fixture()).await;

    let (_, _, body) = get_json(&format!("{}/routes", address)).await;
    assert_eq!(body["scheme"], "http");
    // Host header port is stripped; config http_port is 80, so no suffix.
    assert_eq!(body["host"], "127.0.0.1");
    // Prod environment keeps the configured base URL.
    assert_eq!(body["base_url"], "/app");
    assert_eq!(body["prefix"], "");
    assert_eq!(body["locale"], "en");
}

#[tokio::test]
async fn non_standard_http_port_suffixes_host() {
    let mut config = test_config();
    config.context.http_port = 8080;
    let address = spawn_app(config, exposure_fixture()).await;

    let (_, _, body) = get_json(&format!("{}/routes", address)).await;
    assert_eq!(body["host"], "127.0.0.1:8080");
}

#[tokio::test]
async fn base_url_suppressed_outside_prod() {
    let mut config = test_config();
    config.environment = Environment::Dev;
    let address = spawn_app(config, exposure_fixture()).await;

    let (_, _, body) = get_json(&format!("{}/routes", address)).await;
    assert_eq!(body["base_url"], "");
}

#[tokio::test]
async fn locale_prefix_appears_when_i18n_enabled() {
    let mut config = test_config();
    config.i18n.enabled = true;
    let address = spawn_app(config, exposure_fixture()).await;

    let (_, _, body) = get_json(&format!("{}/routes?_locale=fr", address)).await;
    assert_eq!(body["locale"], "fr");
    assert_eq!(body["prefix"], "fr__RG__");
}

#[tokio::test]
async fn valid_callback_wraps_payload() {
    let address = spawn_app(test_config(), exposure_fixture()).await;

    let response = reqwest::get(format!("{}/routes?callback=app.Router.setData", address))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.starts_with("/**/app.Router.setData("));
    assert!(body.ends_with(");"));

    // The wrapped content is the same JSON the bare endpoint serves.
    let inner = &body["/**/app.Router.setData(".len()..body.len() - ");".len()];
    let json: serde_json::Value = serde_json::from_str(inner).unwrap();
    assert!(json["routes"].as_object().unwrap().contains_key("home"));
}

#[tokio::test]
async fn invalid_callback_is_rejected_without_echo() {
    let address = spawn_app(test_config(), exposure_fixture()).await;

    let response = reqwest::get(format!(
        "{}/routes?callback=alert%281%29%3Bevil",
        address
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 400);

    let body = response.text().await.unwrap();
    assert!(!body.contains("alert"));
    assert!(!body.contains("evil"));
    assert_eq!(body, "Invalid JSONP callback value");
}

#[tokio::test]
async fn cache_header_set_only_for_configured_groups() {
    let address = spawn_app(test_config(), exposure_fixture()).await;

    let (_, headers, _) = get_json(&format!("{}/routes", address)).await;
    assert_eq!(
        headers.get("cache-control").unwrap(),
        "public, max-age=600"
    );

    let (_, headers, _) = get_json(&format!("{}/routes/staff", address)).await;
    assert!(headers.get("cache-control").is_none());
}
