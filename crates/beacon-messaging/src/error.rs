use std::{fmt, ops::Deref, sync::Arc};

use beacon_core::{Cause, ErrorKind, HttpResponse, PlatformError, Subsystem};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

pub type Result<T> = std::result::Result<T, MessagingError>;

/// Fine-grained error codes reported by the messaging backend
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MessagingErrorCode {
    /// APNs certificate or web push auth key was invalid or missing
    #[strum(to_string = "THIRD_PARTY_AUTH_ERROR", serialize = "APNS_AUTH_ERROR")]
    ThirdPartyAuthError,
    /// One or more arguments of the send request were invalid
    InvalidArgument,
    /// Unknown internal error on the messaging backend
    Internal,
    /// Sending limit exceeded for the message target
    QuotaExceeded,
    /// Authenticated sender is different from the registered sender
    SenderIdMismatch,
    /// Messaging service is temporarily unavailable
    Unavailable,
    /// App instance was unregistered from the messaging service
    Unregistered,
}

/// Error raised by the messaging subsystem
///
/// Shares the platform error's fields; built directly or by rewrapping a
/// [`PlatformError`], which leaves kind, message, cause and response as they
/// were.
#[derive(Debug, Clone)]
pub struct MessagingError {
    inner: PlatformError,
    messaging_code: Option<MessagingErrorCode>,
}

impl MessagingError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        PlatformError::new(kind, message).into()
    }

    #[must_use]
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.inner = self.inner.with_cause(cause);
        self
    }

    #[must_use]
    pub fn with_response(mut self, response: Arc<HttpResponse>) -> Self {
        self.inner = self.inner.with_response(response);
        self
    }

    #[must_use]
    pub const fn with_messaging_code(mut self, code: MessagingErrorCode) -> Self {
        self.messaging_code = Some(code);
        self
    }

    /// Underlying error, when this one was raised locally
    ///
    /// Shadows the deprecated `std::error::Error::cause` so the shared cause
    /// is reachable with the trait in scope.
    pub const fn cause(&self) -> Option<&Cause> {
        self.inner.cause()
    }

    /// Backend-specific error code, when the response carried one
    pub const fn messaging_code(&self) -> Option<MessagingErrorCode> {
        self.messaging_code
    }

    /// Unwrap into the platform error, dropping the messaging code
    pub fn into_platform(self) -> PlatformError {
        self.inner
    }
}

impl From<PlatformError> for MessagingError {
    fn from(error: PlatformError) -> Self {
        Self {
            inner: error.rewrap(Subsystem::Messaging),
            messaging_code: None,
        }
    }
}

impl From<MessagingError> for PlatformError {
    fn from(error: MessagingError) -> Self {
        error.inner
    }
}

impl Deref for MessagingError {
    type Target = PlatformError;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Display for MessagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for MessagingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.inner)
    }
}
