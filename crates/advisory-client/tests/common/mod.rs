//! Common test utilities for integration tests.

use advisory_client::AdvisoryClient;
use std::time::Duration;
use wiremock::MockServer;

/// Start a mock advisory backend.
pub async fn mock_backend() -> MockServer {
    MockServer::start().await
}

/// Create an advisory client configured for a mock backend.
pub fn test_client(mock_server: &MockServer) -> AdvisoryClient {
    AdvisoryClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap()
}

/// A well-formed advisory payload.
pub fn advisory_body(temperature: f64, humidity: f64, condition: &str) -> serde_json::Value {
    serde_json::json!({
        "temperature": temperature,
        "humidity": humidity,
        "weatherCondition": condition,
        "advisoryText": format!("{} conditions expected.", condition)
    })
}
