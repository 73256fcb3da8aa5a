mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use common::{COMPONENT, StubDatabaseClient, StubHealthService, create_test_state};
use health_aggregator::api::handlers::{health_handler, info_handler};
use health_aggregator::api::routes::status_routes;
use health_aggregator::domain::health::HealthStatus;
use health_aggregator::state::AppState;
use serde_json::Value;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

async fn get_details(server: &TestServer, expected: StatusCode) -> Value {
    let response = server.get("/health").await;
    response.assert_status(expected);

    let json = response.json::<Value>();
    json["components"][COMPONENT]["details"].clone()
}

#[tokio::test]
async fn test_health_returns_200_when_healthy() {
    let server = make_server(create_test_state(
        StubDatabaseClient::single("sw360db", true),
        StubHealthService::status(HealthStatus::Up),
    ));

    let details = get_details(&server, StatusCode::OK).await;

    assert_eq!(details["isDbReachable"], true);
    assert_eq!(details["serviceStatus"], "UP");
    assert!(details.get("error").is_none());
}

#[tokio::test]
async fn test_health_returns_503_with_missing_db() {
    let server = make_server(create_test_state(
        StubDatabaseClient::single("sw360db", false),
        StubHealthService::status(HealthStatus::Up),
    ));

    let details = get_details(&server, StatusCode::SERVICE_UNAVAILABLE).await;

    assert_eq!(details["isDbReachable"], false);
    assert_eq!(details["serviceStatus"], "UP");
}

#[tokio::test]
async fn test_health_returns_503_with_unhealthy_service() {
    let server = make_server(create_test_state(
        StubDatabaseClient::single("sw360db", true),
        StubHealthService::down_with("sw360db", "The database 'sw360db' does not exist."),
    ));

    let details = get_details(&server, StatusCode::SERVICE_UNAVAILABLE).await;

    assert_eq!(details["isDbReachable"], true);
    assert_eq!(details["serviceStatus"], "DOWN");
    assert_eq!(
        details["db.sw360db"],
        "The database 'sw360db' does not exist."
    );
}

#[tokio::test]
async fn test_health_returns_503_with_unreachable_service() {
    let server = make_server(create_test_state(
        StubDatabaseClient::single("sw360db", true),
        StubHealthService::Fault("service unavailable".to_string()),
    ));

    let details = get_details(&server, StatusCode::SERVICE_UNAVAILABLE).await;

    assert_eq!(details["isDbReachable"], true);
    assert_eq!(details["serviceStatus"], "UNREACHABLE");
    assert!(
        details["error"]
            .as_str()
            .unwrap()
            .contains("service unavailable")
    );
}

#[tokio::test]
async fn test_health_returns_503_when_probe_fails() {
    let server = make_server(create_test_state(
        StubDatabaseClient::failing("sw360db"),
        StubHealthService::status(HealthStatus::Up),
    ));

    let details = get_details(&server, StatusCode::SERVICE_UNAVAILABLE).await;

    assert_eq!(details["isDbReachable"], false);
    assert_eq!(details["serviceStatus"], "UP");
}

#[tokio::test]
async fn test_health_unknown_service_status_is_unhealthy() {
    let server = make_server(create_test_state(
        StubDatabaseClient::single("sw360db", true),
        StubHealthService::status(HealthStatus::Unknown),
    ));

    let details = get_details(&server, StatusCode::SERVICE_UNAVAILABLE).await;

    assert_eq!(details["serviceStatus"], "UNKNOWN");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = make_server(create_test_state(
        StubDatabaseClient::single("sw360db", false),
        StubHealthService::status(HealthStatus::Up),
    ));

    let response = server.get("/health").await;
    let json = response.json::<Value>();

    assert_eq!(json["status"], "DOWN");
    assert_eq!(json["components"][COMPONENT]["status"], "DOWN");
    assert_eq!(json["components"]["ping"]["status"], "UP");
    assert!(json["components"]["ping"].get("details").is_none());
}

#[tokio::test]
async fn test_health_and_info_under_api_prefix() {
    let state = create_test_state(
        StubDatabaseClient::single("sw360db", true),
        StubHealthService::status(HealthStatus::Up),
    );
    let app = Router::new()
        .merge(status_routes())
        .nest("/api", status_routes())
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    server.get("/api/health").await.assert_status_ok();
    server.get("/health").await.assert_status_ok();

    let info = server.get("/api/info").await;
    info.assert_status_ok();
    let json = info.json::<Value>();
    assert_eq!(json["app"]["name"], "health-aggregator");
    assert!(json["app"]["version"].is_string());
}

#[tokio::test]
async fn test_info_returns_200() {
    let app = Router::new().route("/info", get(info_handler));
    let server = TestServer::new(app).unwrap();

    server.get("/info").await.assert_status_ok();
}
