//! Integration tests for the prediction client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server:
//! request shape, error normalization, and response-shape validation.

use application::{ApplicationError, PredictionPort};
use domain::{BasicFeatures, PredictionValue, Season, SimulationRequest, WeatherFeatures};
use integration_predictor::{PredictorClient, PredictorConfig, PredictorError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sample /predict response for testing
fn sample_prediction_response() -> serde_json::Value {
    serde_json::json!({
        "prediction": "Rainy",
        "probabilities": {"Rainy": 0.7, "Sunny": 0.3}
    })
}

/// Sample /simulate response with three scenarios
fn sample_simulation_response() -> serde_json::Value {
    let scenario = |temp: f64, prediction: &str| {
        serde_json::json!({
            "temp": temp, "dwpt": 12.0, "rhum": 66.0, "prcp": 0.2, "snow": 0.0,
            "wdir": 225.0, "wspd": 14.0, "wpgt": 22.0, "pres": 1016.0,
            "hour": 14, "day_of_week": 2,
            "prediction": prediction,
            "probabilities": {prediction: 0.9}
        })
    };
    serde_json::json!({
        "simulations": [scenario(24.0, "9"), scenario(18.0, "0"), scenario(12.0, "1")]
    })
}

fn basic_features() -> WeatherFeatures {
    WeatherFeatures::from(BasicFeatures::default())
}

fn simulation_request() -> SimulationRequest {
    SimulationRequest {
        samples: 3,
        season: Season::Summer,
    }
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> PredictorClient {
    let config = PredictorConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    PredictorClient::new(config).expect("Failed to create client")
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_predict_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_prediction_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.predict(&basic_features()).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let outcome = result.unwrap();
    assert_eq!(outcome.prediction, PredictionValue::from("Rainy"));
    let probabilities = outcome.probabilities.unwrap();
    assert!((probabilities["Rainy"] - 0.7).abs() < f64::EPSILON);
    assert!((probabilities["Sunny"] - 0.3).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_simulate_success_preserves_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/simulate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_simulation_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.simulate(&simulation_request()).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let batch = result.unwrap();
    assert_eq!(batch.len(), 3);
    assert!((batch.get(0).unwrap().features.temp - 24.0).abs() < f64::EPSILON);
    assert!((batch.get(1).unwrap().features.temp - 18.0).abs() < f64::EPSILON);
    assert!((batch.get(2).unwrap().features.temp - 12.0).abs() < f64::EPSILON);
    assert_eq!(
        batch.get(0).unwrap().outcome.prediction,
        PredictionValue::from("9")
    );
}

// ============================================================================
// Request shape verification
// ============================================================================

#[tokio::test]
async fn test_predict_sends_json_features_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "temperature": 25.0, "humidity": 65.0, "wind_speed": 10.0,
            "precipitation": 0.0, "pressure": 1013.0, "cloud_cover": 30.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_prediction_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.predict(&basic_features()).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_simulate_sends_samples_and_season() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/simulate"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "samples": 3, "season": "summer"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_simulation_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.simulate(&simulation_request()).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

// ============================================================================
// Error normalization scenarios
// ============================================================================

#[tokio::test]
async fn test_error_detail_surfaces_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"detail": "humidity out of range"})),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.predict(&basic_features()).await;

    match result {
        Err(PredictorError::RequestFailed(message)) => {
            assert_eq!(message, "humidity out of range");
        },
        other => panic!("Expected RequestFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_error_body_falls_back_to_status_line() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.predict(&basic_features()).await;

    match result {
        Err(PredictorError::RequestFailed(message)) => {
            assert_eq!(message, "HTTP 500 Internal Server Error");
        },
        other => panic!("Expected RequestFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_connection_failed() {
    // Bind a listener to learn a free port, then shut it down.
    // (A dropped wiremock MockServer returns its listener to a pool,
    // so its port stays open and answers 404 instead of refusing.)
    #[allow(clippy::expect_used)]
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    #[allow(clippy::expect_used)]
    let port = listener.local_addr().expect("Failed to get local addr").port();
    let dead_uri = format!("http://127.0.0.1:{port}");
    drop(listener);

    let config = PredictorConfig {
        base_url: dead_uri,
        timeout_secs: 1,
    };
    #[allow(clippy::expect_used)]
    let client = PredictorClient::new(config).expect("Failed to create client");
    let result = client.predict(&basic_features()).await;

    match result {
        Err(PredictorError::ConnectionFailed(message)) => {
            assert!(!message.is_empty());
        },
        other => panic!("Expected ConnectionFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.predict(&basic_features()).await;

    assert!(
        matches!(result, Err(PredictorError::MalformedResponse(_))),
        "Expected MalformedResponse, got: {result:?}"
    );
}

#[tokio::test]
async fn test_simulation_with_out_of_range_fields_is_malformed() {
    let mock_server = MockServer::start().await;

    // rhum 150 violates the 0-100 range enforced at deserialization
    let mut body = sample_simulation_response();
    body["simulations"][0]["rhum"] = serde_json::json!(150.0);

    Mock::given(method("POST"))
        .and(path("/simulate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.simulate(&simulation_request()).await;

    // Raw station fields are not range-checked on responses; the service's
    // generated values are displayed as-is
    assert!(result.is_ok(), "Expected success, got: {result:?}");
    assert!((result.unwrap().get(0).unwrap().features.rhum - 150.0).abs() < f64::EPSILON);
}

// ============================================================================
// Port-level mapping
// ============================================================================

#[tokio::test]
async fn test_port_maps_detail_to_gateway_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"detail": "humidity out of range"})),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = PredictionPort::predict(&client, &basic_features()).await;

    match result {
        Err(ApplicationError::Gateway(message)) => {
            assert_eq!(message, "humidity out of range");
        },
        other => panic!("Expected Gateway error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_port_simulate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/simulate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_simulation_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = PredictionPort::simulate(&client, &simulation_request()).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    assert_eq!(result.unwrap().len(), 3);
}
