//! API failures and their error descriptor mapping
//!
//! Every failure that reaches the server boundary maps to exactly one
//! descriptor: an HTTP status code, a kebab-case error code, a message, and
//! optional structured data. The mapping is exhaustive over [`Failure`], so
//! a response body can always be produced.

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// One segment of a validation failure location path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named object field
    Key(String),
    /// Position within a sequence
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Location path of the offending field
    pub loc: Vec<PathSegment>,
    /// What is wrong with the field
    pub message: String,
}

impl FieldError {
    /// Create a field error from a location path and a message
    #[must_use]
    pub fn new(loc: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self { loc, message: message.into() }
    }

    /// Render the location path in dotted/bracketed form
    ///
    /// The first segment renders bare, indices append as `[N]` with no
    /// separator, and later keys render as `.key`, producing paths like
    /// `body.items[1].field`. An empty path renders as the empty string.
    #[must_use]
    pub fn field(&self) -> String {
        let mut segments = self.loc.iter();
        let mut path = match segments.next() {
            Some(PathSegment::Key(key)) => key.clone(),
            Some(PathSegment::Index(index)) => index.to_string(),
            None => return String::new(),
        };
        for segment in segments {
            match segment {
                PathSegment::Key(key) => {
                    path.push('.');
                    path.push_str(key);
                }
                PathSegment::Index(index) => {
                    path.push_str(&format!("[{index}]"));
                }
            }
        }
        path
    }
}

/// A failure surfaced at the API boundary
#[derive(Debug, Error)]
pub enum Failure {
    /// Failure carrying an explicit HTTP status and detail text
    #[error("{detail}")]
    Http {
        /// HTTP status code, passed through to the descriptor
        status: u16,
        /// Reason phrase, e.g. `Not Found`
        detail: String,
    },

    /// Request data failed validation
    #[error("invalid request data")]
    Validation(Vec<FieldError>),

    /// Any other failure; its text is logged but never surfaced
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Failure {
    /// Create a status-carrying failure
    #[must_use]
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Self::Http { status, detail: detail.into() }
    }

    /// Create a validation failure from field errors
    #[must_use]
    pub const fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    /// HTTP status code of the descriptor
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Http { status, .. } => *status,
            Self::Validation(_) => 422,
            Self::Internal(_) => 500,
        }
    }

    /// Machine-readable error code, always a lowercase kebab-case slug
    #[must_use]
    pub fn error_code(&self) -> String {
        match self {
            // expand "i'm" so the 418 reason phrase slugs without apostrophes
            Self::Http { detail, .. } => {
                detail.to_lowercase().replace("i'm", "i am").replace(' ', "-")
            }
            Self::Validation(_) => "validation-error".to_string(),
            Self::Internal(_) => "internal-error".to_string(),
        }
    }

    /// Human-readable error message
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Http { status: 404, .. } => "requested path does not exist".to_string(),
            Self::Http { detail, .. } => detail.to_lowercase(),
            Self::Validation(_) => "error validating input data".to_string(),
            Self::Internal(_) => "unknown error".to_string(),
        }
    }

    /// Structured error data, present only for validation failures
    #[must_use]
    pub fn error_data(&self) -> Option<Value> {
        match self {
            Self::Validation(errors) => Some(Value::Array(
                errors
                    .iter()
                    .map(|error| json!({"field": error.field(), "message": error.message}))
                    .collect(),
            )),
            Self::Http { .. } | Self::Internal(_) => None,
        }
    }
}

/// API component representing any error
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Structured error data, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Human-readable error message
    pub message: String,
}

impl From<&Failure> for ErrorResponse {
    fn from(failure: &Failure) -> Self {
        Self {
            code: failure.error_code(),
            data: failure.error_data(),
            message: failure.message(),
        }
    }
}
