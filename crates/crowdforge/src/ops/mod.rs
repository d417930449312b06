//! Mechanical, reusable side-effecting operations. Workflows call into
//! these so the consumer-facing surface stays thin while status handling,
//! decoding, and logging live here.

pub mod application;
pub mod contribution;
pub mod profile;

use crate::{Error, config::ConfigError, domain::DomainError, infra::InfraError};
use thiserror::Error as ThisError;

///
/// OpsError
/// Error envelope shared across operations submodules
///

#[derive(Debug, ThisError)]
pub enum OpsError {
    #[error("config error: {0}")]
    Config(String),

    /// The contribution list endpoint is all-or-nothing; any status other
    /// than 200 propagates.
    #[error("contribution list returned status {0}")]
    ContributionListStatus(u16),

    /// `get_user_information` answered with an empty record sequence.
    #[error("profile registry has no record for {0}")]
    MissingUserRecord(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl From<ConfigError> for OpsError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<OpsError> for Error {
    fn from(err: OpsError) -> Self {
        Self::ops(err.to_string())
    }
}

/// Common imports for ops submodules.
pub mod prelude {
    pub use crate::{
        ids::{AccountAddress, ContributionId, ContributorId},
        infra::http::HttpTransport,
        log,
        ops::OpsError,
    };
    pub use async_trait::async_trait;
}
