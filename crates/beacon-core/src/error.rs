use std::sync::Arc;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ErrorDescription, ErrorKind, HttpResponse};

/// Underlying error shared between clones of a [`PlatformError`]
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Subsystem an error is scoped to
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum Subsystem {
    /// Generic platform error, not scoped to a feature
    #[default]
    Platform,
    /// Cloud messaging
    Messaging,
}

/// Common error type for every failed platform call
///
/// Immutable once built. The attached response is shared, not owned: the
/// caller that received it keeps its own handle.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct PlatformError {
    subsystem: Subsystem,
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Option<Cause>,
    response: Option<Arc<HttpResponse>>,
}

impl PlatformError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            subsystem: Subsystem::Platform,
            kind,
            message: message.into(),
            cause: None,
            response: None,
        }
    }

    /// Attach the underlying error this one was raised from
    #[must_use]
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    #[must_use]
    pub fn with_response(mut self, response: Arc<HttpResponse>) -> Self {
        self.response = Some(response);
        self
    }

    #[must_use]
    pub fn with_subsystem(mut self, subsystem: Subsystem) -> Self {
        self.subsystem = subsystem;
        self
    }

    /// Scope this error to another subsystem
    ///
    /// Only the subsystem tag changes; kind, message, cause and response are
    /// moved over as they are.
    #[must_use]
    pub fn rewrap(self, subsystem: Subsystem) -> Self {
        self.with_subsystem(subsystem)
    }

    pub const fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub const fn response(&self) -> Option<&Arc<HttpResponse>> {
        self.response.as_ref()
    }

    /// Status code of the attached response, if there is one
    pub fn status(&self) -> Option<StatusCode> {
        self.response.as_deref().map(HttpResponse::status)
    }
}

impl From<ErrorDescription> for PlatformError {
    fn from(description: ErrorDescription) -> Self {
        let ErrorDescription {
            kind,
            message,
            response,
            ..
        } = description;

        Self {
            subsystem: Subsystem::Platform,
            kind,
            message,
            cause: None,
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[derive(Debug, Error)]
    #[error("connection reset")]
    struct Reset;

    fn full_error() -> PlatformError {
        PlatformError::new(ErrorKind::Unavailable, "backend down")
            .with_cause(Reset)
            .with_response(Arc::new(HttpResponse::new(StatusCode::SERVICE_UNAVAILABLE)))
    }

    #[test]
    fn new_error_is_platform_scoped() {
        let err = PlatformError::new(ErrorKind::NotFound, "missing");

        assert_eq!(err.subsystem(), Subsystem::Platform);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "missing");
        assert!(err.cause().is_none());
        assert!(err.response().is_none());
        assert!(err.status().is_none());
    }

    #[test]
    fn source_is_the_cause() {
        let err = full_error();

        let source = err.source().expect("cause should be exposed as source");
        assert_eq!(source.to_string(), "connection reset");
        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[test]
    fn rewrap_preserves_every_field() {
        let original = full_error();
        let cause = Arc::clone(original.cause().unwrap());
        let response = Arc::clone(original.response().unwrap());

        let rewrapped = original.clone().rewrap(Subsystem::Messaging);

        assert_eq!(rewrapped.subsystem(), Subsystem::Messaging);
        assert_eq!(rewrapped.kind(), original.kind());
        assert_eq!(rewrapped.message(), original.message());
        assert!(Arc::ptr_eq(rewrapped.cause().unwrap(), &cause));
        assert!(Arc::ptr_eq(rewrapped.response().unwrap(), &response));
    }

    #[test]
    fn subsystem_display() {
        assert_eq!(Subsystem::Platform.to_string(), "platform");
        assert_eq!(Subsystem::Messaging.to_string(), "messaging");
    }
}
