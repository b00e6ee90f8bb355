//! Error types for the site API client.
//!
//! # Design
//! There is one error kind at the client boundary: the request failed.
//! Transport errors, non-2xx statuses, unreadable bodies and envelopes with
//! `success: false` all land in `RequestFailed`, distinguished only by the
//! message. The status is kept when the server answered at all.

use thiserror::Error;

/// Message used when the server gives no reason of its own.
pub const FALLBACK_MESSAGE: &str = "API request failed";

/// Errors returned by `ApiClient` and the resource namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    RequestFailed {
        /// HTTP status, when a response was received.
        status: Option<u16>,
        message: String,
    },
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => *status,
        }
    }
}
