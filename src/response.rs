//! The response builder.
//!
//! [`LambdaResponse`] owns all mutable response state and exposes chainable
//! mutators that converge on the single JSON object a proxy integration
//! accepts: status code, header map, string body, and a base64 flag. Binary
//! payloads of every shape funnel through [`LambdaResponse::base64_body`];
//! textual payloads are stored as UTF-8 strings. The finished value is
//! handed to the hosting dispatcher, which serializes it with [`serde`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use lambda_response::LambdaResponse;
//!
//! let response = LambdaResponse::new()
//!     .status(201)
//!     .json(&serde_json::json!({ "created": true }))?;
//!
//! assert_eq!(response.status_code(), 201);
//! assert_eq!(serde_json::to_value(&response)?["isBase64Encoded"], false);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt};
use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION};
use log::debug;
use serde::Serialize;
use serde_json::json;

use crate::errors::{HttpError, ResponseError};
use crate::payload::{BoxError, NumericArray, Payload};
use crate::utils::charset;

/// A header value: a single string or an ordered sequence of strings for
/// multi-valued fields. Serializes as a bare string or a string array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Single(String),
    Multi(Vec<String>),
}

impl HeaderValue {
    /// Returns the value when it is a single string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Single(value) => Some(value),
            HeaderValue::Multi(_) => None,
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Single(value.to_owned())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Single(value)
    }
}

impl From<Vec<String>> for HeaderValue {
    fn from(values: Vec<String>) -> Self {
        HeaderValue::Multi(values)
    }
}

impl From<Vec<&str>> for HeaderValue {
    fn from(values: Vec<&str>) -> Self {
        HeaderValue::Multi(values.into_iter().map(str::to_owned).collect())
    }
}

/// Content-Disposition variants set by the send helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Disposition::Inline => "inline",
            Disposition::Attachment => "attachment",
        })
    }
}

/// Options for the disposition send helpers.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Quoted into the Content-Disposition header when present.
    pub filename: Option<String>,
}

impl SendOptions {
    /// Options carrying a download filename.
    pub fn with_filename(filename: impl Into<String>) -> Self {
        SendOptions { filename: Some(filename.into()) }
    }
}

/// Builder for proxy-integration responses.
///
/// Accumulates status, headers, and body through chained calls, then
/// serializes to the wire shape the hosting gateway accepts:
///
/// ```json
/// { "statusCode": 200, "headers": {}, "body": null, "isBase64Encoded": false }
/// ```
///
/// Header names are case-normalized to lower case on every read and write;
/// the casing of the supplied name is not preserved. The body holds either
/// a UTF-8 string or base64 data, never both: each body producer resets
/// the encoding flag to match what it stored.
///
/// # Examples
///
/// ```rust,ignore
/// use lambda_response::LambdaResponse;
///
/// // JSON response with inferred Content-Type
/// let response = LambdaResponse::new()
///     .json(&serde_json::json!({ "hello": "world" }))?;
///
/// // binary response from a file on disk
/// let picture = LambdaResponse::new().send_file("assets/cat.jpeg")?;
/// assert!(picture.is_base64_encoded());
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    status_code: u16,
    headers: HashMap<String, HeaderValue>,
    body: Option<String>,
    is_base64_encoded: bool,
}

impl LambdaResponse {
    /// Creates a builder with default state: status 200, no headers, no
    /// body.
    pub fn new() -> Self {
        LambdaResponse {
            status_code: 200,
            headers: HashMap::new(),
            body: None,
            is_base64_encoded: false,
        }
    }

    /// Sets the status code. Values are passed through without range
    /// validation.
    pub fn status(mut self, code: u16) -> Self {
        self.status_code = code;
        self
    }

    /// Standard reason phrase for `code`, defaulting to the current status.
    ///
    /// Returns `None` for codes without a registered phrase.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use lambda_response::LambdaResponse;
    ///
    /// let response = LambdaResponse::new().status(404);
    /// assert_eq!(response.status_description(None), Some("Not Found"));
    /// assert_eq!(response.status_description(Some(502)), Some("Bad Gateway"));
    /// ```
    pub fn status_description(&self, code: Option<u16>) -> Option<&'static str> {
        let code = code.unwrap_or(self.status_code);
        http::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
    }

    /// Returns the header stored under `name`, compared case-insensitively.
    pub fn get_header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(&name.to_ascii_lowercase())
    }

    /// Stores `value` under the lower-cased `name`, replacing any previous
    /// value for that field.
    pub fn set_header(&mut self, name: &str, value: HeaderValue) {
        self.headers.insert(name.to_ascii_lowercase(), value);
    }

    /// Sets a single header, with Content-Type charset inference.
    ///
    /// A Content-Type value naming a textual MIME type without a
    /// `charset=` parameter acquires the type's default charset; values
    /// that already carry one pass through unmodified. Content-Type cannot
    /// be multi-valued.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use lambda_response::LambdaResponse;
    ///
    /// let response = LambdaResponse::new().set("Content-Type", "text/plain")?;
    /// assert_eq!(
    ///     response.get_header("content-type").and_then(|v| v.as_str()),
    ///     Some("text/plain; charset=utf-8"),
    /// );
    /// ```
    pub fn set<V>(mut self, name: &str, value: V) -> Result<Self, ResponseError>
    where
        V: Into<HeaderValue>,
    {
        let mut value = value.into();
        if name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
            match value {
                HeaderValue::Multi(_) => {
                    return Err(ResponseError::InvalidHeader(
                        "Content-Type cannot be set to an array".to_owned(),
                    ))
                }
                HeaderValue::Single(raw) => {
                    value = HeaderValue::Single(charset::with_default_charset(&raw));
                }
            }
        }
        self.set_header(name, value);
        Ok(self)
    }

    /// Applies [`set`](Self::set) for every entry, in iteration order.
    pub fn set_all<I, K, V>(self, entries: I) -> Result<Self, ResponseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<HeaderValue>,
    {
        entries
            .into_iter()
            .try_fold(self, |response, (name, value)| response.set(name.as_ref(), value))
    }

    /// Sets Content-Type from a literal MIME type or a file extension.
    ///
    /// Arguments containing `/` are taken verbatim; anything else is
    /// resolved as an extension, falling back to
    /// `application/octet-stream` when the lookup yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use lambda_response::LambdaResponse;
    ///
    /// let html = LambdaResponse::new().content_type("html")?;
    /// let png = LambdaResponse::new().content_type("image/png")?;
    /// ```
    pub fn content_type(self, type_or_extension: &str) -> Result<Self, ResponseError> {
        let resolved = if type_or_extension.contains('/') {
            type_or_extension.to_owned()
        } else {
            mime_guess::from_ext(type_or_extension)
                .first()
                .map(|mime_type| mime_type.to_string())
                .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string())
        };
        self.set(CONTENT_TYPE.as_str(), resolved)
    }

    /// Serializes `value` as the JSON string body.
    ///
    /// Sets Content-Type to `application/json` (acquiring the utf-8
    /// charset) only when no Content-Type has been set.
    pub fn json<T>(mut self, value: &T) -> Result<Self, ResponseError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(value)?;
        self.store_json_body(body);
        Ok(self)
    }

    /// Sets the Location header, forcing status 302 unless the current
    /// status is already a redirect code.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use lambda_response::LambdaResponse;
    ///
    /// let found = LambdaResponse::new().redirect("https://example.com/");
    /// assert_eq!(found.status_code(), 302);
    ///
    /// let moved = LambdaResponse::new().status(301).redirect("https://example.com/");
    /// assert_eq!(moved.status_code(), 301);
    /// ```
    pub fn redirect(mut self, location: &str) -> Self {
        if !(300..400).contains(&self.status_code) {
            self.status_code = 302;
        }
        self.set_header(LOCATION.as_str(), HeaderValue::Single(location.to_owned()));
        self
    }

    /// Encodes `bytes` as base64 and stores it as the body.
    ///
    /// This is the convergence point for every binary payload path; it
    /// flips the encoding flag so the dispatcher decodes the body before
    /// writing it to the transport.
    pub fn base64_body(mut self, bytes: &[u8]) -> Self {
        self.body = Some(STANDARD.encode(bytes));
        self.is_base64_encoded = true;
        self
    }

    /// Reads the file at `path` into a base64 body.
    ///
    /// The path is resolved to an absolute location and Content-Type is
    /// inferred from its extension before the synchronous full read.
    pub fn send_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ResponseError> {
        let path = path.as_ref();
        let resolved = path.canonicalize().map_err(|source| ResponseError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        let response = self.content_type(extension)?;
        let contents = fs::read(&resolved).map_err(|source| ResponseError::FileRead {
            path: resolved.clone(),
            source,
        })?;
        debug!("read {} bytes from {}", contents.len(), resolved.display());
        Ok(response.base64_body(&contents))
    }

    /// Drains `stream` to completion into a base64 body.
    ///
    /// Chunks are concatenated in arrival order. A stream error propagates
    /// as a failed result; no partial body is ever stored. Buffering is
    /// unbounded, so the caller owns any size or time limits.
    pub async fn send_stream<S, E>(self, mut stream: S) -> Result<Self, ResponseError>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        E: Into<BoxError>,
    {
        let mut buffer = BytesMut::new();
        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(bytes) => buffer.extend_from_slice(&bytes),
                Err(err) => return Err(ResponseError::Stream(err.into())),
            }
        }
        debug!("drained stream into a {} byte body", buffer.len());
        Ok(self.base64_body(&buffer))
    }

    /// Stores an in-memory buffer as a base64 body.
    pub fn send_buffer(self, buffer: &[u8]) -> Self {
        self.base64_body(buffer)
    }

    /// Stores a typed numeric array's raw bytes as a base64 body.
    pub fn send_numeric_array(self, array: &NumericArray) -> Self {
        self.base64_body(&array.to_bytes())
    }

    /// Unified payload acceptor: dispatches `payload` to the matching
    /// ingestion path.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use lambda_response::{LambdaResponse, Payload};
    ///
    /// let response = LambdaResponse::new()
    ///     .send(Payload::from(vec![0xde, 0xad, 0xbe, 0xef]))
    ///     .await?;
    /// assert!(response.is_base64_encoded());
    /// ```
    pub async fn send(self, payload: Payload) -> Result<Self, ResponseError> {
        match payload {
            Payload::Path(path) => self.send_file(path),
            Payload::Stream(stream) => self.send_stream(stream).await,
            Payload::Buffer(buffer) => Ok(self.send_buffer(&buffer)),
            Payload::Array(array) => Ok(self.send_numeric_array(&array)),
        }
    }

    /// Sends `payload` for download: Content-Disposition `attachment`,
    /// with the quoted filename from `options` when given.
    pub async fn attachment(
        self,
        payload: Payload,
        options: SendOptions,
    ) -> Result<Self, ResponseError> {
        self.send_with_disposition(Disposition::Attachment, payload, options).await
    }

    /// Sends `payload` for in-place rendering: Content-Disposition
    /// `inline`.
    pub async fn inline(
        self,
        payload: Payload,
        options: SendOptions,
    ) -> Result<Self, ResponseError> {
        self.send_with_disposition(Disposition::Inline, payload, options).await
    }

    async fn send_with_disposition(
        mut self,
        disposition: Disposition,
        payload: Payload,
        options: SendOptions,
    ) -> Result<Self, ResponseError> {
        if self.get_header(CONTENT_DISPOSITION.as_str()).is_none() {
            let value = match options.filename {
                Some(filename) => format!("{}; filename=\"{}\"", disposition, filename),
                None => disposition.to_string(),
            };
            self.set_header(CONTENT_DISPOSITION.as_str(), HeaderValue::Single(value));
        }
        self.send(payload).await
    }

    /// Translates an error-like value into a well-formed error response.
    ///
    /// The status comes from the error when it carries one; otherwise a
    /// non-error status is raised to 500 and an existing error status is
    /// kept. The body is always `{"errorMessage": ...}`: the error's own
    /// message when it may be exposed (explicitly, or by default for 4xx
    /// statuses), the standard reason phrase otherwise. Hidden messages
    /// never reach the body, and any previously stored body is discarded
    /// first.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use lambda_response::{HttpError, LambdaResponse};
    ///
    /// let response = LambdaResponse::new()
    ///     .from_error(&HttpError::new("connection pool exhausted"));
    /// assert_eq!(response.status_code(), 500);
    /// assert_eq!(response.body(), Some(r#"{"errorMessage":"Internal Server Error"}"#));
    /// ```
    pub fn from_error(mut self, err: &HttpError) -> Self {
        if let Some(code) = err.status_code() {
            self.status_code = code;
        } else if self.status_code < 400 {
            self.status_code = 500;
        }
        let expose = err
            .expose()
            .unwrap_or_else(|| (400..500).contains(&self.status_code));
        let reason = self.status_description(None);
        let message = if expose { err.message().or(reason) } else { reason };
        debug!("translated error into a {} response (expose: {})", self.status_code, expose);
        // drop anything stored earlier so stale data cannot leak into the
        // error body
        self.body = None;
        self.is_base64_encoded = false;
        let body = match message {
            Some(text) => json!({ "errorMessage": text }),
            None => json!({}),
        };
        self.store_json_body(body.to_string());
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn headers(&self) -> &HashMap<String, HeaderValue> {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded
    }

    fn store_json_body(&mut self, body: String) {
        self.body = Some(body);
        self.is_base64_encoded = false;
        if self.get_header(CONTENT_TYPE.as_str()).is_none() {
            self.set_header(
                CONTENT_TYPE.as_str(),
                HeaderValue::Single(charset::with_default_charset(mime::APPLICATION_JSON.as_ref())),
            );
        }
    }
}

impl Default for LambdaResponse {
    fn default() -> Self {
        LambdaResponse::new()
    }
}
