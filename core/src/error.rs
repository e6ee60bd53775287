use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// The error type for agcod operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    body: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Credentials exist but are unusable (empty key id or secret)
    CredentialInvalid,

    /// Request cannot be built (bad header, uri or body)
    RequestInvalid,

    /// The signing routine rejected the request
    SigningFailed,

    /// Network failure while talking to the remote service (DNS, connect, timeout, I/O)
    Transport,

    /// The remote service answered with a non-success status
    UnexpectedStatus,

    /// The remote service answered with a payload we could not decode
    ResponseInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the remote status, only set for [`ErrorKind::UnexpectedStatus`].
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Get the remote response body, only set for [`ErrorKind::UnexpectedStatus`].
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a signing failed error
    pub fn signing_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SigningFailed, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create an unexpected status error carrying the remote status and body.
    pub fn unexpected_status(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let mut err = Self::new(
            ErrorKind::UnexpectedStatus,
            format!("remote returned {status}: {body}"),
        );
        err.status = Some(status);
        err.body = Some(body);
        err
    }

    /// Create a response invalid error
    pub fn response_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResponseInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::SigningFailed => write!(f, "signing failed"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::UnexpectedStatus => write!(f, "unexpected status"),
            ErrorKind::ResponseInvalid => write!(f, "invalid response"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
