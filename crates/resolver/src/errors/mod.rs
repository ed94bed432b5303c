//! Error types and status classification for the resolver crate.
//!
//! This module provides:
//! - [`ResolverError`]: The main error enum for all resolution operations
//! - [`Code`]: Classification of an error at the RPC boundary
//! - [`Status`]: Serializable status used for partial failures and error details

mod status;

pub use status::{Code, Status};

use thiserror::Error;

/// Errors that can occur during resolution.
///
/// Each variant is classified into a [`Code`] via the [`code`](Self::code)
/// method, which determines how the transport reports it and whether a
/// fan-out task failure is a partial failure or something worse.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Nothing was found and no backend failed.
    #[error("did not find '{type_url}' with searched schemas '{}'", .searched.join(","))]
    NotFound {
        type_url: String,
        searched: Vec<String>,
    },

    /// Nothing was found and at least one backend failed.
    /// Every partial failure is attached as a detail.
    #[error(
        "did not find '{type_url}' with searched schemas '{}', encountered {} errors",
        .searched.join(","),
        .failures.len()
    )]
    LookupFailed {
        type_url: String,
        searched: Vec<String>,
        failures: Vec<Status>,
    },

    /// The structured input does not match any identifier this resolver
    /// dispatches on. Input types are declared by schemas, so this is a
    /// registration mismatch rather than a user error.
    #[error("unrecognized input type '{input}' for '{want}'")]
    UnexpectedInput { want: String, input: String },

    /// The resolver was asked for an output type it does not implement.
    #[error("resolver '{resolver}' does not implement '{type_url}'")]
    UnsupportedType { resolver: String, type_url: String },

    /// A free-text query could not be parsed.
    #[error("invalid query '{query}': {reason}")]
    InvalidQuery { query: String, reason: String },

    /// Autocomplete was requested but no search index is configured.
    #[error("autocomplete is not configured for '{0}'")]
    AutocompleteUnavailable(String),

    /// A provider call failed. Inside a fan-out this becomes a partial failure.
    #[error("{provider}: {message}")]
    Provider {
        provider: String,
        code: Code,
        message: String,
    },

    /// The request scope was cancelled.
    #[error("request cancelled")]
    Cancelled,

    /// The request deadline passed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// A resolved object could not be encoded.
    #[error("failed to encode resolved object: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResolverError {
    /// Convenience constructor for provider failures.
    pub fn provider(provider: impl Into<String>, code: Code, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            code,
            message: message.into(),
        }
    }

    /// Returns the status code for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookout_resolver::errors::{Code, ResolverError};
    ///
    /// let error = ResolverError::AutocompleteUnavailable("Instance".to_string());
    /// assert_eq!(error.code(), Code::FailedPrecondition);
    ///
    /// let error = ResolverError::UnexpectedInput {
    ///     want: "Instance".to_string(),
    ///     input: "PodID".to_string(),
    /// };
    /// assert_eq!(error.code(), Code::Internal);
    /// ```
    pub fn code(&self) -> Code {
        match self {
            Self::NotFound { .. } => Code::NotFound,

            Self::LookupFailed { .. } | Self::AutocompleteUnavailable(_) => {
                Code::FailedPrecondition
            }

            Self::InvalidQuery { .. } => Code::InvalidArgument,

            // Registration mismatches and encoding bugs
            Self::UnexpectedInput { .. }
            | Self::UnsupportedType { .. }
            | Self::Encode(_)
            | Self::Internal(_) => Code::Internal,

            Self::Provider { code, .. } => *code,
            Self::Cancelled => Code::Cancelled,
            Self::DeadlineExceeded => Code::DeadlineExceeded,
        }
    }

    /// Structured details carried by this error.
    pub fn details(&self) -> &[Status] {
        match self {
            Self::LookupFailed { failures, .. } => failures,
            _ => &[],
        }
    }

    /// Convert into a serializable [`Status`], keeping details structured.
    pub fn to_status(&self) -> Status {
        Status::new(self.code(), self.to_string()).with_details(self.details().to_vec())
    }
}

impl From<&ResolverError> for Status {
    fn from(error: &ResolverError) -> Self {
        error.to_status()
    }
}

impl From<ResolverError> for Status {
    fn from(error: ResolverError) -> Self {
        error.to_status()
    }
}
