use std::sync::Arc;

use beacon_core::{ErrorHandler, ErrorKind, HttpErrorHandler, HttpResponse, PlatformError, Subsystem};
use beacon_messaging::{MessagingErrorCode, MessagingErrorHandler};
use http::StatusCode;
use serde::Serialize;

/// Outcome of classifying one response, as printed by the CLI
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Report {
    Success,
    Error {
        subsystem: Subsystem,
        kind: ErrorKind,
        status: Option<u16>,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        messaging_code: Option<MessagingErrorCode>,
    },
}

impl Report {
    fn from_error(error: &PlatformError, messaging_code: Option<MessagingErrorCode>) -> Self {
        Self::Error {
            subsystem: error.subsystem(),
            kind: error.kind(),
            status: error.status().map(|s| s.as_u16()),
            message: error.message().to_owned(),
            messaging_code,
        }
    }
}

/// Run the classifier for `subsystem` over a status and body
pub fn classify(subsystem: Subsystem, status: StatusCode, body: &str) -> Report {
    let response = Arc::new(HttpResponse::new(status));

    let outcome = match subsystem {
        Subsystem::Messaging => MessagingErrorHandler
            .check(&response, body)
            .map_err(|e| Report::from_error(&e, e.messaging_code())),
        _ => HttpErrorHandler
            .check(&response, body)
            .map_err(|e| Report::from_error(&e, None)),
    };

    match outcome {
        Ok(()) => Report::Success,
        Err(report) => report,
    }
}
