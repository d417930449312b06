use derive_more::Display;
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level structured error type.
///
/// Layer errors (`ConfigError`, `DomainError`, `InfraError`, `OpsError`,
/// `WorkflowError`) stay private to their layer and convert into this
/// envelope at the crate boundary, so consumers match on the class rather
/// than on layer internals.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct Error {
    class: ErrorClass,
    message: String,
}

impl Error {
    pub(crate) fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Config, message)
    }

    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Domain, message)
    }

    pub(crate) fn infra(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Infra, message)
    }

    pub(crate) fn ops(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Ops, message)
    }

    pub(crate) fn workflow(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Workflow, message)
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        self.class
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    Config,
    Domain,
    Infra,
    Ops,
    Workflow,
}
