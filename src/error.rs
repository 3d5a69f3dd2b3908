//! Error type definitions.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A `Result` alias where the `Err` case is `knowalledge_rs::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// The default message surfaced for API errors whose body carries none.
pub(crate) static DEFAULT_API_ERROR_MESSAGE: &str = "Something went wrong!";

/// The error type for the Knowalledge client.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid token (make sure there are no invalid characters)")]
    InvalidToken,
    #[error("Failed to setup HTTP client: {0}")]
    HttpClientSetup(reqwest::Error),
    #[error("Failed to deserialize response: {0}")]
    Deserialize(reqwest::Error),
    #[error("Http transport error: {0}")]
    Transport(reqwest::Error),
    #[error(transparent)]
    Api(ApiError),
    #[error(transparent)]
    Validation(ValidationErrors),
    #[error(transparent)]
    InvalidParams(#[from] serde_qs::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(url::ParseError),
    #[error("Invalid content type: {0}")]
    InvalidContentType(String),
    #[error("Credential store error: {0}")]
    Store(#[from] std::io::Error),
}

/// An error returned by the Knowalledge API.
///
/// The backend reports failures as a JSON object with an optional `message`
/// field; the HTTP status, method and path are attached client-side.
#[derive(Deserialize, Debug)]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    #[serde(skip)]
    pub method: http::Method,
    #[serde(skip)]
    pub path: String,
    pub message: Option<String>,
    #[serde(default)]
    pub success: bool,
}

impl ApiError {
    pub(crate) fn new(status: u16, method: http::Method, path: String) -> Self {
        Self {
            status,
            method,
            path,
            message: None,
            success: false,
        }
    }

    /// The server-supplied message, or a fixed default when the error body
    /// had none.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_API_ERROR_MESSAGE)
    }
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Received {} on {} {}: {}",
            self.status,
            self.method,
            self.path,
            self.message()
        )
    }
}

/// Client-side required-field check failures, reported before any network
/// call is made.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

/// A single failed field check.
#[derive(Debug)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationErrors {
    pub(crate) fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failed checks, in the order the fields were validated.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}
