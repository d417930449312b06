//! Pure decision logic with no I/O: given wire data, produce a verdict.

pub mod contributor;

use crate::Error;
use thiserror::Error as ThisError;

///
/// DomainError
///

#[derive(Debug, ThisError)]
pub enum DomainError {
    #[error(transparent)]
    Contributor(#[from] contributor::ContributorError),
}

impl From<DomainError> for Error {
    fn from(err: DomainError) -> Self {
        Self::domain(err.to_string())
    }
}
