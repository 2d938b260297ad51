use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// Platform-wide error categories
///
/// Every error produced by this crate, or by a subsystem built on it, carries
/// exactly one of these. `Unknown` is the explicit "no better mapping"
/// value and is never a sign of a bug in classification.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Attempted to create a resource that already exists
    AlreadyExists,
    /// One or more arguments of the call were invalid
    InvalidArgument,
    /// The system is not in a state required for the operation
    FailedPrecondition,
    /// Missing or invalid credentials
    Unauthenticated,
    /// Credentials lack permission for the operation
    PermissionDenied,
    /// The requested resource does not exist
    NotFound,
    /// Concurrency conflict such as a read-modify-write race
    Conflict,
    /// Quota or rate limit exhausted
    ResourceExhausted,
    /// No more specific kind applies
    #[default]
    Unknown,
    /// Internal server error on the backend
    Internal,
    /// The backend is temporarily unavailable
    Unavailable,
    /// The deadline expired before the operation completed
    DeadlineExceeded,
}

impl ErrorKind {
    /// Stable wire representation (e.g. `NOT_FOUND`)
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
