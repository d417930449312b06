//! Transport seams. Raw I/O only: no caching, no interpretation, no
//! degradation policy — that all lives in the layers above.

pub mod gateway;
pub mod http;

use crate::Error;
use thiserror::Error as ThisError;

///
/// InfraError
///

#[derive(Debug, ThisError)]
pub enum InfraError {
    /// Network-level failure before any status line was read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote answered with a status the caller cannot interpret.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    /// The remote answered 2xx but the payload does not parse.
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedReply(err.to_string())
    }
}

impl From<InfraError> for Error {
    fn from(err: InfraError) -> Self {
        Self::infra(err.to_string())
    }
}
