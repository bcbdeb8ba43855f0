//! Integration tests for the lookup pipeline.
//!
//! These tests verify the orchestration contract: strict sequencing, error
//! short-circuiting (later stages are never invoked after a failure), and
//! the end-to-end success path.

use std::time::Duration;

use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iss_spotter::{
    next_passes, run_lookup, Config, LogFormat, LogLevel, LookupError, OutputFormat,
    OverpassWindow, Stage,
};

/// Helper function to create an HTTP client for tests
fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client")
}

/// Helper function to create a Config pointing all three stages at a mock server
fn create_test_config(server_uri: &str) -> Config {
    Config {
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        output: OutputFormat::Text,
        ip_endpoint: format!("{server_uri}/ip"),
        geo_endpoint: format!("{server_uri}/geo"),
        pass_endpoint: format!("{server_uri}/passes"),
        timeout_seconds: 5,
        user_agent: "iss_spotter_test/1.0".to_string(),
    }
}

/// Mounts a successful IP-lookup mock.
async fn mount_ip_success(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ip": "93.28.202.218"}"#))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_pipeline_success_worked_example() {
    let mock_server = MockServer::start().await;

    mount_ip_success(&mock_server).await;
    Mock::given(method("GET"))
        .and(path("/geo/93.28.202.218"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"latitude": "49.27670", "longitude": "-123.13000"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/passes"))
        .and(query_param("lat", "49.2767"))
        .and(query_param("lon", "-123.13"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"message": "success", "response": [{"risetime": 134564234, "duration": 600}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let passes = next_passes(&test_client(), &config)
        .await
        .expect("pipeline should succeed");

    // The orchestrator returns the pass list unchanged
    assert_eq!(
        passes,
        vec![OverpassWindow {
            risetime: 134564234,
            duration: 600
        }]
    );
}

#[tokio::test]
async fn test_pipeline_short_circuits_when_ip_lookup_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;
    // Later stages must never be invoked; expect(0) is verified on drop
    Mock::given(method("GET"))
        .and(path_regex(r"^/geo(/.*)?$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/passes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let err = next_passes(&test_client(), &config)
        .await
        .expect_err("pipeline should fail");

    // The orchestrator surfaces the IP stage's error unchanged
    assert!(matches!(
        err,
        LookupError::Remote {
            stage: Stage::IpLookup,
            status: 500,
            ..
        }
    ));
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("boom"));
}

#[tokio::test]
async fn test_pipeline_short_circuits_when_geolocation_fails() {
    let mock_server = MockServer::start().await;

    mount_ip_success(&mock_server).await;
    Mock::given(method("GET"))
        .and(path("/geo/93.28.202.218"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/passes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let err = next_passes(&test_client(), &config)
        .await
        .expect_err("pipeline should fail");

    assert!(matches!(
        err,
        LookupError::Remote {
            stage: Stage::Geolocation,
            status: 403,
            ..
        }
    ));
}

#[tokio::test]
async fn test_pipeline_short_circuits_on_transport_failure() {
    let mock_server = MockServer::start().await;

    // IP endpoint points at a port with nothing listening
    let mut config = create_test_config(&mock_server.uri());
    config.ip_endpoint = "http://127.0.0.1:9/ip".to_string();

    Mock::given(method("GET"))
        .and(path_regex(r"^/geo(/.*)?$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/passes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = next_passes(&test_client(), &config)
        .await
        .expect_err("pipeline should fail");
    assert!(matches!(err, LookupError::Transport(_)));
}

#[tokio::test]
async fn test_run_lookup_success_returns_report() {
    let mock_server = MockServer::start().await;

    mount_ip_success(&mock_server).await;
    Mock::given(method("GET"))
        .and(path("/geo/93.28.202.218"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"latitude": 49.2767, "longitude": -123.13}"#),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/passes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"message": "success", "response": [
                {"risetime": 134564234, "duration": 600},
                {"risetime": 134570000, "duration": 480}
            ]}"#,
        ))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let report = run_lookup(config).await.expect("run_lookup should succeed");

    assert_eq!(report.passes.len(), 2);
    assert_eq!(report.passes[0].risetime, 134564234);
    assert!(report.elapsed_seconds >= 0.0);
}

#[tokio::test]
async fn test_run_lookup_rejects_invalid_config() {
    let config = Config {
        timeout_seconds: 0,
        ..Default::default()
    };

    let err = run_lookup(config)
        .await
        .expect_err("invalid config should fail before any request");
    let rendered = format!("{err:#}");
    assert!(rendered.contains("timeout_seconds"));
}
