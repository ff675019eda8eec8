//! # lambda-response
//!
//! **An Express-style response builder for serverless HTTP proxy
//! integrations**
//!
//! Serverless gateways hand a function one shot at answering: a single
//! buffered JSON object carrying the status code, a header map, a string
//! body, and a flag saying whether that body is base64-encoded binary.
//! `lambda-response` adapts the familiar chainable `res` surface onto that
//! contract, so handlers read like web handlers while producing exactly
//! the object the gateway expects.
//!
//! ## Features
//!
//! - **Chainable builder**: status, headers, JSON bodies, and redirects
//!   through consuming method chains
//! - **Header normalization**: case-insensitive header map with automatic
//!   Content-Type charset injection for textual MIME types
//! - **Binary payloads**: file paths, byte streams, in-memory buffers, and
//!   typed numeric arrays all converge on one base64 body
//! - **Safe error translation**: application errors become well-formed
//!   responses that hide server-side detail by default
//!
//! ## Quick Start
//!
//! Add the crate to your `Cargo.toml`:
//!
//! ```toml
//! lambda-response = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust,ignore
//! use lambda_response::{HttpError, LambdaResponse, Payload, SendOptions};
//!
//! // a JSON response
//! let ok = LambdaResponse::new()
//!     .status(200)
//!     .json(&serde_json::json!({ "hello": "world" }))?;
//!
//! // a file download
//! let download = LambdaResponse::new()
//!     .attachment(
//!         Payload::from("reports/summary.pdf"),
//!         SendOptions::with_filename("Summary.pdf"),
//!     )
//!     .await?;
//!
//! // an error the client is allowed to see
//! let missing = LambdaResponse::new()
//!     .from_error(&HttpError::new("This video does not exist!").with_status(404));
//!
//! // hand any of them to the dispatcher
//! let wire = serde_json::to_string(&ok)?;
//! ```
//!
//! ## Modules
//!
//! - [`response`]: the [`LambdaResponse`] builder and header types
//! - [`payload`]: the tagged payload variants accepted by the send path
//! - [`errors`]: builder errors and the [`HttpError`] input type
//! - [`utils`]: MIME charset lookup helpers

pub mod errors;
pub mod payload;
pub mod response;
mod tests;
pub mod utils;

pub use errors::{HttpError, ResponseError};
pub use payload::{BoxError, ByteStream, NumericArray, Payload};
pub use response::{Disposition, HeaderValue, LambdaResponse, SendOptions};

use serde_json::Value;

/// Inputs the [`create_response`] factory can route into a response.
pub enum ResponseInput {
    /// An already-built response, passed through unchanged.
    Response(LambdaResponse),
    /// An error-like value, translated via
    /// [`from_error`](LambdaResponse::from_error).
    Error(HttpError),
    /// A plain data value, serialized via
    /// [`json`](LambdaResponse::json).
    Data(Value),
}

impl From<LambdaResponse> for ResponseInput {
    fn from(response: LambdaResponse) -> Self {
        ResponseInput::Response(response)
    }
}

impl From<HttpError> for ResponseInput {
    fn from(err: HttpError) -> Self {
        ResponseInput::Error(err)
    }
}

impl From<Value> for ResponseInput {
    fn from(value: Value) -> Self {
        ResponseInput::Data(value)
    }
}

/// Builds a response from whatever a handler produced.
///
/// With no input, returns a fresh default builder. A finished response
/// passes through unchanged; an error-like value is translated; a JSON
/// object or array becomes a JSON body; JSON `null` counts as no input.
/// Bare scalars are not routable and are rejected.
///
/// # Examples
///
/// ```rust,ignore
/// use lambda_response::{create_response, HttpError};
///
/// let empty = create_response(None)?;
/// assert_eq!(empty.status_code(), 200);
///
/// let data = create_response(Some(serde_json::json!({ "a": 1 }).into()))?;
/// assert_eq!(data.body(), Some(r#"{"a":1}"#));
///
/// let failed = create_response(Some(HttpError::new("nope").with_status(400).into()))?;
/// assert_eq!(failed.status_code(), 400);
/// ```
pub fn create_response(input: Option<ResponseInput>) -> Result<LambdaResponse, ResponseError> {
    let Some(input) = input else {
        return Ok(LambdaResponse::new());
    };
    match input {
        ResponseInput::Response(response) => Ok(response),
        ResponseInput::Error(err) => Ok(LambdaResponse::new().from_error(&err)),
        ResponseInput::Data(Value::Null) => Ok(LambdaResponse::new()),
        ResponseInput::Data(value @ (Value::Object(_) | Value::Array(_))) => {
            LambdaResponse::new().json(&value)
        }
        ResponseInput::Data(_) => Err(ResponseError::UnsupportedData),
    }
}
