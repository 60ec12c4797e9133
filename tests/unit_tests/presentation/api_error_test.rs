use axum::http::StatusCode;

use whisper_relay::application::ports::TranscriptionError;
use whisper_relay::presentation::ApiError;

#[test]
fn given_incorrect_api_key_message_when_classifying_then_is_auth_error() {
    let error = ApiError::classify("401 Incorrect API key provided: sk-...");

    assert_eq!(error, ApiError::Auth);
    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error.message(), "Invalid API configuration");
}

#[test]
fn given_audio_format_message_when_classifying_then_is_format_error() {
    let error = ApiError::classify("audio file format not supported");

    assert_eq!(error, ApiError::Format);
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.message(), "Invalid audio format");
}

#[test]
fn given_connection_messages_when_classifying_then_is_transient_network_error() {
    for message in ["read ECONNRESET", "Connection error: refused"] {
        let error = ApiError::classify(message);

        assert_eq!(error, ApiError::TransientNetwork);
        assert_eq!(error.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error.message(), "Connection error. Please try again.");
    }
}

#[test]
fn given_several_signatures_when_classifying_then_first_in_order_wins() {
    assert_eq!(
        ApiError::classify("ECONNRESET after Incorrect API key"),
        ApiError::Auth
    );
    assert_eq!(
        ApiError::classify("Connection error while sending audio file format probe"),
        ApiError::Format
    );
}

#[test]
fn given_other_message_when_classifying_then_is_unknown_with_raw_message() {
    let error = ApiError::classify("500 The server had an error");

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.message(), "500 The server had an error");
}

#[test]
fn given_empty_message_when_classifying_then_uses_generic_message() {
    let error = ApiError::classify("");

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.message(), "An unexpected error occurred");
}

#[test]
fn given_validation_error_when_rendering_then_is_bad_request_with_message() {
    let error = ApiError::Validation("No audio file provided".to_string());

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.message(), "No audio file provided");
}

#[test]
fn given_transcription_errors_when_converting_then_classifies_display_text() {
    assert_eq!(
        ApiError::from(&TranscriptionError::Connection("ECONNRESET".to_string())),
        ApiError::TransientNetwork
    );
    assert_eq!(
        ApiError::from(&TranscriptionError::UnsupportedFormat("x".to_string())),
        ApiError::Format
    );
    assert_eq!(
        ApiError::from(&TranscriptionError::Timeout("elapsed".to_string())),
        ApiError::Unknown("Request timeout: elapsed".to_string())
    );
}

#[tokio::test]
async fn given_api_error_when_converted_to_response_then_body_has_error_field() {
    use axum::response::IntoResponse;

    let response = ApiError::Auth.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Invalid API configuration" }));
}
