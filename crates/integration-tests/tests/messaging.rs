mod support;

use beacon_core::{ErrorKind, PlatformError, Subsystem, read_checked};
use beacon_messaging::{MessagingError, MessagingErrorCode, MessagingErrorHandler};
use support::{MockBackend, error_envelope};

const SEND: &str = "/v1/projects/demo/messages:send";

async fn send(backend: &MockBackend) -> MessagingError {
    read_checked(&MessagingErrorHandler, backend.post(SEND).await)
        .await
        .unwrap_err()
}

#[tokio::test]
async fn unregistered_token() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            SEND,
            404,
            error_envelope(404, "NOT_FOUND", "Requested entity was not found.", Some("UNREGISTERED")),
        )
        .await;

    let err = send(&backend).await;

    assert_eq!(err.subsystem(), Subsystem::Messaging);
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.message(), "Requested entity was not found.");
    assert_eq!(err.messaging_code(), Some(MessagingErrorCode::Unregistered));
}

#[tokio::test]
async fn vendor_invalid_argument_overrides_status() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            SEND,
            403,
            error_envelope(403, "INVALID_ARGUMENT", "SenderId mismatch", Some("SENDER_ID_MISMATCH")),
        )
        .await;

    let err = send(&backend).await;

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.messaging_code(), Some(MessagingErrorCode::SenderIdMismatch));
}

#[tokio::test]
async fn html_error_page_falls_back_to_status() {
    let backend = MockBackend::start().await;
    backend
        .respond(SEND, 503, "<html><body>Service Unavailable</body></html>")
        .await;

    let err = send(&backend).await;

    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert!(err.messaging_code().is_none());
    assert!(err.message().contains("503"));
    assert!(err.message().contains("<html><body>Service Unavailable</body></html>"));
}

#[tokio::test]
async fn success_passes_through() {
    let backend = MockBackend::start().await;
    backend
        .respond(SEND, 200, r#"{"name": "projects/demo/messages/1"}"#)
        .await;

    let body = read_checked(&MessagingErrorHandler, backend.post(SEND).await)
        .await
        .unwrap();

    assert!(body.contains("projects/demo/messages/1"));
}

#[tokio::test]
async fn rewrap_back_to_platform_keeps_fields() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(SEND, 429, error_envelope(429, "RESOURCE_EXHAUSTED", "quota", Some("QUOTA_EXCEEDED")))
        .await;

    let err = send(&backend).await;
    let response = err.response().cloned().unwrap();

    let platform = PlatformError::from(err);
    let again = MessagingError::from(platform.clone());

    assert_eq!(platform.kind(), ErrorKind::ResourceExhausted);
    assert_eq!(again.kind(), platform.kind());
    assert_eq!(again.message(), platform.message());
    assert!(std::sync::Arc::ptr_eq(again.response().unwrap(), &response));
    assert!(again.messaging_code().is_none());
}
