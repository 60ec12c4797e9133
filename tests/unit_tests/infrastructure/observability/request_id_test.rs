use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Extension, Router, middleware};
use tower::ServiceExt;
use uuid::Uuid;

use whisper_relay::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

async fn echo_request_id(Extension(request_id): Extension<RequestId>) -> String {
    request_id.0
}

fn create_app() -> Router {
    Router::new()
        .route("/", get(echo_request_id))
        .layer(middleware::from_fn(request_id_middleware))
}

async fn send(header: Option<&'static str>) -> (StatusCode, String, String) {
    let mut builder = Request::builder().uri("/");
    if let Some(value) = header {
        builder = builder.header(REQUEST_ID_HEADER, value);
    }

    let response = create_app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let echoed = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, echoed, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn given_client_request_id_when_handled_then_handler_and_response_share_it() {
    let (status, echoed, seen_by_handler) = send(Some("client-42")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(echoed, "client-42");
    assert_eq!(seen_by_handler, "client-42");
}

#[tokio::test]
async fn given_padded_request_id_when_handled_then_whitespace_is_trimmed() {
    let (_, echoed, seen_by_handler) = send(Some("  client-42  ")).await;

    assert_eq!(echoed, "client-42");
    assert_eq!(seen_by_handler, "client-42");
}

#[tokio::test]
async fn given_blank_request_id_when_handled_then_generates_uuid() {
    let (_, echoed, seen_by_handler) = send(Some("   ")).await;

    assert!(Uuid::parse_str(&echoed).is_ok());
    assert_eq!(echoed, seen_by_handler);
}

#[tokio::test]
async fn given_no_request_id_when_handled_then_generates_uuid() {
    let (_, echoed, seen_by_handler) = send(None).await;

    assert!(Uuid::parse_str(&echoed).is_ok());
    assert_eq!(echoed, seen_by_handler);
}
