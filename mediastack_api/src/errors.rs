//! Error types for the API client.

use crate::types::ApiError;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No access key was configured; nothing was sent.
    #[error("No mediastack access key configured")]
    MissingAccessKey,
    /// The request could not be built or sent, or its body could not be read.
    #[error("Request failed")]
    RequestFailed,
    /// The API answered with an `error` object.
    #[error("Error accessing the API: {error}")]
    Api { status: u16, error: ApiError },
    /// A non-success status whose body carried no `error` object.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A success status with a body that is neither a `data` nor an `error`
    /// response.
    #[error("Unrecognized response: {reason}")]
    MalformedResponse { reason: String, body: String },
}
