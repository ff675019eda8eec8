//! Error handling types for the response builder.
//!
//! This module defines the error type returned by fallible builder
//! operations, plus [`HttpError`], the error-like value that
//! [`from_error`](crate::LambdaResponse::from_error) translates into a
//! well-formed proxy response.
//!
//! # Examples
//!
//! ```rust,ignore
//! use lambda_response::{HttpError, LambdaResponse};
//!
//! let err = HttpError::new("This video does not exist!").with_status(404);
//! let response = LambdaResponse::new().from_error(&err);
//! assert_eq!(response.status_code(), 404);
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::payload::BoxError;

/// Main error type for response builder operations.
///
/// Each variant provides specific context about what went wrong while
/// constructing a response. None of these are swallowed internally; they
/// surface to the immediate caller.
///
/// # Examples
///
/// ```rust,ignore
/// use lambda_response::{LambdaResponse, ResponseError};
///
/// match LambdaResponse::new().set("Content-Type", vec!["a", "b"]) {
///     Err(ResponseError::InvalidHeader(msg)) => eprintln!("bad header: {}", msg),
///     Err(other) => eprintln!("error: {}", other),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ResponseError {
    /// A header was given a value its field cannot carry
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// The factory was given a value it cannot route into a response
    #[error("Unsupported data type")]
    UnsupportedData,

    /// A file payload could not be resolved or read
    #[error("Failed to read {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source stream signaled an error before completing
    #[error("Stream failed: {0}")]
    Stream(BoxError),

    /// Body serialization errors
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// An error-like value carrying the optional status, message, and expose
/// flag that drive error translation.
///
/// Mirrors the shape handlers typically attach to application errors: a
/// status code for the response, a human-readable message, and an `expose`
/// flag controlling whether that message may reach the client. All three
/// are optional; [`from_error`](crate::LambdaResponse::from_error) fills in
/// the documented defaults.
///
/// # Examples
///
/// ```rust,ignore
/// use lambda_response::HttpError;
///
/// // 4xx errors expose their message by default
/// let not_found = HttpError::new("no such record").with_status(404);
///
/// // force an internal message through on a 5xx response
/// let visible = HttpError::new("upstream rejected us")
///     .with_status(502)
///     .with_expose(true);
/// ```
#[derive(Debug, Clone, Default, Error)]
#[error("{}", .message.as_deref().unwrap_or("unspecified error"))]
pub struct HttpError {
    status_code: Option<u16>,
    message: Option<String>,
    expose: Option<bool>,
}

impl HttpError {
    /// Creates an error with the given message and no status or expose flag.
    pub fn new(message: impl Into<String>) -> Self {
        HttpError { status_code: None, message: Some(message.into()), expose: None }
    }

    /// Sets the status code the translated response should carry.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Explicitly sets whether the message may appear in the response body.
    ///
    /// When unset, 4xx statuses expose the message and everything else
    /// hides it.
    pub fn with_expose(mut self, expose: bool) -> Self {
        self.expose = Some(expose);
        self
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn expose(&self) -> Option<bool> {
        self.expose
    }
}

impl From<ResponseError> for HttpError {
    fn from(err: ResponseError) -> Self {
        HttpError::new(err.to_string())
    }
}
