use std::{str::FromStr, sync::Arc};

use beacon_core::{
    ErrorDescription, ErrorHandler, ErrorKind, HttpResponse, PlatformError, Subsystem, map_status, map_vendor_code,
};

use crate::{
    error::{MessagingError, MessagingErrorCode},
    protocol::ErrorResponse,
};

/// Classifier for messaging API responses
///
/// Understands the JSON error envelope the messaging backend returns and
/// falls back to status-code classification for anything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessagingErrorHandler;

impl ErrorHandler for MessagingErrorHandler {
    type Error = MessagingError;

    fn subsystem(&self) -> Subsystem {
        Subsystem::Messaging
    }

    fn describe(&self, response: &Arc<HttpResponse>, body: &str) -> ErrorDescription {
        let Some(error) = ErrorResponse::parse(body) else {
            return ErrorDescription::from_status(response, body);
        };

        let kind = match error.status.as_deref().map(map_vendor_code) {
            Some(kind) if kind != ErrorKind::Unknown => kind,
            _ => map_status(response.status().as_u16()),
        };

        let mut description = ErrorDescription::from_status(response, body);
        description.kind = kind;

        if let Some(message) = error.message.filter(|m| !m.trim().is_empty()) {
            description.message = message;
        }

        description
    }

    fn construct(&self, description: ErrorDescription) -> MessagingError {
        // describe already logged any decode failure for this body
        let messaging_code = ErrorResponse::decode(&description.body)
            .ok()
            .flatten()
            .as_ref()
            .and_then(|error| error.fcm_error_code())
            .and_then(|code| match MessagingErrorCode::from_str(code) {
                Ok(code) => Some(code),
                Err(_) => {
                    tracing::debug!(code, "unrecognised messaging error code");
                    None
                }
            });

        let error = MessagingError::from(PlatformError::from(description));

        match messaging_code {
            Some(code) => error.with_messaging_code(code),
            None => error,
        }
    }
}
