//! Payload variants accepted by the unified send path.
//!
//! Callers construct the variant matching what they hold (a filesystem
//! path, a chunked byte stream, an in-memory buffer, or a typed numeric
//! array) and hand it to [`send`](crate::LambdaResponse::send) or the
//! disposition helpers. Dispatch is total over this enum; there is no
//! "unknown payload" case to fail on at runtime.
//!
//! # Examples
//!
//! ```rust,ignore
//! use lambda_response::{LambdaResponse, Payload, SendOptions};
//!
//! let response = LambdaResponse::new()
//!     .inline(Payload::from("assets/logo.png"), SendOptions::default())
//!     .await?;
//! ```

use std::path::{Path, PathBuf};
use std::pin::Pin;

use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};

/// Boxed error type carried by stream failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A boxed source of ordered byte chunks, ending with completion or an
/// error signal.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, BoxError>> + Send>>;

/// A binary payload, tagged by the shape the caller holds.
pub enum Payload {
    /// A filesystem path; contents are read synchronously and in full.
    Path(PathBuf),
    /// A chunked byte stream, drained asynchronously to completion.
    Stream(ByteStream),
    /// An in-memory byte buffer, used as-is.
    Buffer(Bytes),
    /// A typed numeric array, serialized as its raw byte representation.
    Array(NumericArray),
}

impl Payload {
    /// Wraps any compatible chunk stream as a [`Payload::Stream`].
    pub fn stream<S, E>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes, E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        Payload::Stream(Box::pin(stream.map_err(Into::into)))
    }
}

impl From<&str> for Payload {
    /// Strings are file paths, matching the path-first dispatch of the
    /// send helpers.
    fn from(path: &str) -> Self {
        Payload::Path(PathBuf::from(path))
    }
}

impl From<&Path> for Payload {
    fn from(path: &Path) -> Self {
        Payload::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Payload {
    fn from(path: PathBuf) -> Self {
        Payload::Path(path)
    }
}

impl From<Bytes> for Payload {
    fn from(buffer: Bytes) -> Self {
        Payload::Buffer(buffer)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(buffer: Vec<u8>) -> Self {
        Payload::Buffer(Bytes::from(buffer))
    }
}

impl From<NumericArray> for Payload {
    fn from(array: NumericArray) -> Self {
        Payload::Array(array)
    }
}

/// A fixed-width numeric array whose raw bytes become the response body.
///
/// Element types wider than one byte serialize their little-endian byte
/// representation, not their decimal textual form.
///
/// # Examples
///
/// ```rust,ignore
/// use lambda_response::NumericArray;
///
/// let array = NumericArray::from(vec![104u8, 101, 108, 108, 111]);
/// assert_eq!(array.to_bytes(), b"hello");
///
/// let wide = NumericArray::from(vec![1u32]);
/// assert_eq!(wide.to_bytes(), [1, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum NumericArray {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl NumericArray {
    /// Copies the array into its raw little-endian byte representation.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            NumericArray::U8(values) => values.clone(),
            NumericArray::I8(values) => values.iter().map(|v| *v as u8).collect(),
            NumericArray::I16(values) => values.iter().flat_map(|v| v.to_le_bytes()).collect(),
            NumericArray::U16(values) => values.iter().flat_map(|v| v.to_le_bytes()).collect(),
            NumericArray::I32(values) => values.iter().flat_map(|v| v.to_le_bytes()).collect(),
            NumericArray::U32(values) => values.iter().flat_map(|v| v.to_le_bytes()).collect(),
            NumericArray::F32(values) => values.iter().flat_map(|v| v.to_le_bytes()).collect(),
            NumericArray::F64(values) => values.iter().flat_map(|v| v.to_le_bytes()).collect(),
        }
    }
}

impl From<Vec<i8>> for NumericArray {
    fn from(values: Vec<i8>) -> Self {
        NumericArray::I8(values)
    }
}

impl From<Vec<u8>> for NumericArray {
    fn from(values: Vec<u8>) -> Self {
        NumericArray::U8(values)
    }
}

impl From<Vec<i16>> for NumericArray {
    fn from(values: Vec<i16>) -> Self {
        NumericArray::I16(values)
    }
}

impl From<Vec<u16>> for NumericArray {
    fn from(values: Vec<u16>) -> Self {
        NumericArray::U16(values)
    }
}

impl From<Vec<i32>> for NumericArray {
    fn from(values: Vec<i32>) -> Self {
        NumericArray::I32(values)
    }
}

impl From<Vec<u32>> for NumericArray {
    fn from(values: Vec<u32>) -> Self {
        NumericArray::U32(values)
    }
}

impl From<Vec<f32>> for NumericArray {
    fn from(values: Vec<f32>) -> Self {
        NumericArray::F32(values)
    }
}

impl From<Vec<f64>> for NumericArray {
    fn from(values: Vec<f64>) -> Self {
        NumericArray::F64(values)
    }
}
