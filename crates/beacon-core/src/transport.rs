use std::sync::Arc;

use crate::{ErrorHandler, ErrorKind, HttpResponse, PlatformError};

/// Read a `reqwest` response body and classify it
///
/// Returns the body text for 2xx responses.
///
/// # Errors
///
/// Returns the handler's error for non-2xx responses. If the body cannot be
/// read, returns an `Unknown` error carrying the transport error as its
/// cause and the response head.
pub async fn read_checked<H>(handler: &H, response: reqwest::Response) -> Result<String, H::Error>
where
    H: ErrorHandler,
    H::Error: From<PlatformError>,
{
    let head = Arc::new(HttpResponse::from(&response));

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(status = head.status().as_u16(), error = %e, "failed to read response body");
            let err = PlatformError::new(ErrorKind::Unknown, format!("failed to read response body: {e}"))
                .with_cause(e)
                .with_response(head);
            return Err(err.into());
        }
    };

    handler.check(&head, &body)?;

    Ok(body)
}
