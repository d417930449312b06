//! Derived-state queries and orchestration. This is the surface consumers
//! call; everything below it is mechanical.

pub mod application;
pub mod notify;
pub mod query;

use crate::{Error, ops::OpsError};
use thiserror::Error as ThisError;

///
/// WorkflowError
///

#[derive(Debug, ThisError)]
pub enum WorkflowError {
    #[error(transparent)]
    Ops(#[from] OpsError),
}

impl From<WorkflowError> for Error {
    fn from(err: WorkflowError) -> Self {
        Self::workflow(err.to_string())
    }
}

/// Common imports for workflow submodules.
pub mod prelude {
    pub use crate::{
        Error,
        ids::{AccountAddress, ContributionId, ContributorId},
        log,
        log::Topic,
        workflow::WorkflowError,
    };
}
