//! Error taxonomy for TMDB calls and JSON error body flattening.

use std::fmt::Write as _;

use reqwest::StatusCode;
use serde_json::Value;

use crate::media::MediaType;

/// Typed failures surfaced by the client.
///
/// Returned errors are `anyhow::Error` values carrying call context; use
/// `err.downcast_ref::<TmdbError>()` to branch on the kind.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// Non-success status with a JSON body.
    #[error("TMDB API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Flattened representation of the error body.
        message: String,
    },

    /// Non-success status whose body is not JSON.
    #[error("TMDB API error (HTTP {status}): {body}")]
    UnparseableError {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// Discriminator does not match the requested conversion.
    #[error("invalid conversion from {from} to {to}")]
    InvalidConversion {
        /// Discriminator found on the object.
        from: String,
        /// Requested target type.
        to: MediaType,
    },

    /// Object carries no `media_type` discriminator.
    #[error("invalid conversion to {to}: media_type is missing")]
    MissingMediaType {
        /// Requested target type.
        to: MediaType,
    },

    /// Discriminator missing or outside the set a [`Media`](crate::Media)
    /// can hold.
    #[error("unsupported media_type {}", found.as_deref().unwrap_or("(missing)"))]
    UnsupportedMediaType {
        /// Discriminator found on the object, if any.
        found: Option<String>,
    },

    /// Discriminator matched but the fields did not fit the target shape.
    #[error("failed to decode {to} object")]
    Decode {
        /// Requested target type.
        to: MediaType,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
}

impl TmdbError {
    /// Builds the error for a non-success response body.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::Api {
                status,
                message: flatten_error_value(&value),
            },
            Err(_) => Self::UnparseableError {
                status,
                body: body.to_owned(),
            },
        }
    }

    /// HTTP status for API-reported failures.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } | Self::UnparseableError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Renders an arbitrary JSON error body as a single readable line.
///
/// Arrays render as `[a, b]`, objects as `{key: value}` with keys sorted so the
/// same body always yields the same message.
#[must_use]
pub fn flatten_error_value(value: &Value) -> String {
    let mut out = String::new();
    write_flat(&mut out, value);
    out
}

fn write_flat(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_flat(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                if let Some(v) = map.get(key) {
                    write_flat(out, v);
                }
            }
            out.push('}');
        }
    }
}
