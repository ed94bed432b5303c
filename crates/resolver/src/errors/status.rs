use std::fmt;

use serde::{Deserialize, Serialize};

/// Status code attached to every error and partial failure.
///
/// The set mirrors the canonical gRPC codes the resolver surface uses.
///
/// | Code | Meaning at this boundary |
/// |------|--------------------------|
/// | `NotFound` | Nothing found and no backend failed |
/// | `FailedPrecondition` | Nothing found but backends failed, or a capability is missing |
/// | `InvalidArgument` | Malformed free-text query |
/// | `OutOfRange` | Schema declares a required option field with no options |
/// | `Internal` | Programmer error (schema/registration mismatch) |
/// | `Unavailable` | A backend could not be reached |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    PermissionDenied,
    FailedPrecondition,
    OutOfRange,
    Internal,
    Unavailable,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::NotFound => "NOT_FOUND",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
        };
        f.write_str(name)
    }
}

/// Serializable status: a code, a message, and structured details.
///
/// Partial failures travel as `Status` values so callers can tell one failed
/// region from another instead of reading a flattened string.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub code: Code,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Status>,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<Status>) -> Self {
        self.details = details;
        self
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
