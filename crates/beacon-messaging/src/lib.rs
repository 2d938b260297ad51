//! Messaging subsystem errors
//!
//! [`MessagingErrorHandler`] classifies failed messaging API calls into
//! [`MessagingError`]s, reading the backend's JSON error envelope when one is
//! present.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod handler;
mod protocol;

pub use error::{MessagingError, MessagingErrorCode, Result};
pub use handler::MessagingErrorHandler;
