//! Lookup tables from transport-level codes to [`ErrorKind`]
//!
//! Both functions are total: anything outside the table is `Unknown`.

use http::StatusCode;

use crate::ErrorKind;

/// Map a numeric HTTP status code to an error kind
pub const fn map_status(status: u16) -> ErrorKind {
    match status {
        400 => ErrorKind::InvalidArgument,
        401 => ErrorKind::Unauthenticated,
        403 => ErrorKind::PermissionDenied,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        429 => ErrorKind::ResourceExhausted,
        500 => ErrorKind::Internal,
        503 => ErrorKind::Unavailable,
        _ => ErrorKind::Unknown,
    }
}

/// Map a vendor error token found in a response body to an error kind
///
/// Matching is exact and case-sensitive.
pub fn map_vendor_code(code: &str) -> ErrorKind {
    match code {
        "INVALID_ARGUMENT" => ErrorKind::InvalidArgument,
        _ => ErrorKind::Unknown,
    }
}

impl From<StatusCode> for ErrorKind {
    fn from(status: StatusCode) -> Self {
        map_status(status.as_u16())
    }
}
