use std::sync::Arc;

use crate::{ErrorKind, HttpResponse, PlatformError, Subsystem, mapping::map_status};

/// Everything a classifier extracted from one failed response
///
/// Built by [`ErrorHandler::describe`] and consumed right away by
/// [`ErrorHandler::construct`].
#[derive(Debug, Clone)]
pub struct ErrorDescription {
    pub kind: ErrorKind,
    /// Human-readable message, never empty once it leaves [`ErrorHandler::check`]
    pub message: String,
    /// `None` only for errors raised locally rather than by a response
    pub response: Option<Arc<HttpResponse>>,
    /// Raw response body as received
    pub body: String,
}

impl ErrorDescription {
    /// Describe a response from its status code alone
    ///
    /// The message embeds the numeric and symbolic status, then the body
    /// verbatim on the next line.
    pub fn from_status(response: &Arc<HttpResponse>, body: &str) -> Self {
        Self {
            kind: map_status(response.status().as_u16()),
            message: status_message(response, body),
            response: Some(Arc::clone(response)),
            body: body.to_owned(),
        }
    }
}

/// Default message for an unexpected response
pub fn status_message(response: &HttpResponse, body: &str) -> String {
    let status = response.status();
    let reason = status.canonical_reason().unwrap_or("Unknown Status");
    format!(
        "Unexpected HTTP response with status: {} ({reason})\n{body}",
        status.as_u16()
    )
}

/// Turns failed HTTP responses into terminal errors
///
/// Subsystems customise classification by overriding one or both of
/// [`describe`](Self::describe) and [`construct`](Self::construct); the
/// [`check`](Self::check) entry point stays the same for all of them.
pub trait ErrorHandler {
    type Error: std::error::Error;

    /// Subsystem the produced errors belong to
    fn subsystem(&self) -> Subsystem {
        Subsystem::Platform
    }

    /// Extract kind and message from a failed response
    fn describe(&self, response: &Arc<HttpResponse>, body: &str) -> ErrorDescription {
        ErrorDescription::from_status(response, body)
    }

    /// Build the terminal error from a description
    fn construct(&self, description: ErrorDescription) -> Self::Error;

    /// Return `Ok` for 2xx responses, otherwise the classified error
    ///
    /// # Errors
    ///
    /// Returns exactly one error for every non-2xx response
    fn check(&self, response: &Arc<HttpResponse>, body: &str) -> Result<(), Self::Error> {
        if response.is_success() {
            return Ok(());
        }

        let mut description = self.describe(response, body);

        if description.message.trim().is_empty() {
            description.message = status_message(response, body);
        }

        tracing::debug!(
            status = response.status().as_u16(),
            kind = %description.kind,
            subsystem = %self.subsystem(),
            "classified error response"
        );

        Err(self.construct(description))
    }
}

/// Status-code-only classifier producing [`PlatformError`]
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpErrorHandler;

impl ErrorHandler for HttpErrorHandler {
    type Error = PlatformError;

    fn construct(&self, description: ErrorDescription) -> PlatformError {
        description.into()
    }
}
