//! Error type definitions and categorization.
//!
//! This module defines the error contract shared by all three lookup stages
//! and the categorization used when reporting failures in logs.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::fetch::Stage;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The single error contract shared by every lookup stage.
///
/// Each stage produces exactly one of {error, result}. The three failure
/// outcomes mirror the stage anatomy: the request itself failed
/// ([`Transport`](LookupError::Transport)), the remote answered with a
/// non-200 status ([`Remote`](LookupError::Remote)), or the 200 body did not
/// have the documented shape ([`Parse`](LookupError::Parse)).
#[derive(Error, Debug)]
pub enum LookupError {
    /// The network call could not complete (DNS failure, connection refused,
    /// offline, timeout). The underlying cause is forwarded verbatim.
    #[error(transparent)]
    Transport(#[from] ReqwestError),

    /// The remote service responded with a non-200 status. Carries the status
    /// code and the raw response body as diagnostic context.
    #[error("status code {status} when fetching {stage}: {body}")]
    Remote {
        /// Which pipeline stage received the response.
        stage: Stage,
        /// The HTTP status code.
        status: u16,
        /// The raw response body, unparsed.
        body: String,
    },

    /// Malformed JSON, or a well-formed body missing a documented field.
    /// Surfaces whatever the parsing layer raised, unwrapped.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// A request URL could not be constructed. Only reachable with malformed
    /// endpoint overrides.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Categories of lookup failures, used for log reporting.
///
/// Transport errors are split by the underlying `reqwest` error kind so that
/// a timeout reads differently from a refused connection in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum ErrorType {
    /// The request timed out.
    HttpRequestTimeoutError,
    /// The connection could not be established.
    HttpRequestConnectError,
    /// The request failed while being sent.
    HttpRequestRequestError,
    /// The response body could not be read or decoded by the transport.
    HttpRequestBodyError,
    /// Any other transport-level failure.
    HttpRequestOtherError,
    /// The remote service answered with a non-200 status.
    RemoteStatusError,
    /// The response body was not the documented JSON shape.
    ResponseParseError,
    /// A request URL could not be constructed.
    RequestUrlError,
}

impl ErrorType {
    /// Returns a human-readable label for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::RemoteStatusError => "Remote status error",
            ErrorType::ResponseParseError => "Response parse error",
            ErrorType::RequestUrlError => "Request URL error",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorizes a [`LookupError`] for reporting.
///
/// For transport failures the underlying `reqwest::Error` kind is inspected
/// (timeout, connect, request, body) so the log line names the actual failure
/// mode rather than a generic transport error.
pub fn classify(error: &LookupError) -> ErrorType {
    match error {
        LookupError::Transport(e) => {
            if e.is_timeout() {
                ErrorType::HttpRequestTimeoutError
            } else if e.is_connect() {
                ErrorType::HttpRequestConnectError
            } else if e.is_body() || e.is_decode() {
                ErrorType::HttpRequestBodyError
            } else if e.is_request() {
                ErrorType::HttpRequestRequestError
            } else {
                ErrorType::HttpRequestOtherError
            }
        }
        LookupError::Remote { .. } => ErrorType::RemoteStatusError,
        LookupError::Parse(_) => ErrorType::ResponseParseError,
        LookupError::Url(_) => ErrorType::RequestUrlError,
    }
}

/// Logs a lookup failure with its category at error level.
pub fn log_lookup_failure(error: &LookupError) {
    log::error!("{}: {error}", classify(error));
}
