//! Platform error taxonomy
//!
//! Normalises failed HTTP responses from remote APIs into a closed set of
//! [`ErrorKind`]s. Feature crates call an [`ErrorHandler`] with the response
//! and body they received and get back a [`PlatformError`] (or their own
//! wrapper around one).

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod handler;
mod kind;
pub mod mapping;
mod response;
#[cfg(feature = "reqwest")]
mod transport;

pub use error::{Cause, PlatformError, Subsystem};
pub use handler::{ErrorDescription, ErrorHandler, HttpErrorHandler, status_message};
pub use kind::ErrorKind;
pub use mapping::{map_status, map_vendor_code};
pub use response::HttpResponse;
#[cfg(feature = "reqwest")]
pub use transport::read_checked;
