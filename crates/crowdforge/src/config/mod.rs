pub mod schema;

use crate::Error;
use schema::{ConfigSchemaError, Validate};
use std::{cell::RefCell, sync::Arc};
use thiserror::Error as ThisError;

pub use schema::ConfigModel;

//
// CONFIG
//
// Initialized once per process from an embedded TOML string. The store is
// thread-local because every query in this crate runs on one cooperative
// thread; the Arc keeps reads cheap for the ops that hold onto a snapshot
// across an await.
//

thread_local! {
    static CONFIG: RefCell<Option<Arc<ConfigModel>>> = const { RefCell::new(None) };
}

/// Errors related to configuration lifecycle and parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config has already been initialized")]
    AlreadyInitialized,

    #[error("config has not been initialized")]
    NotInitialized,

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

///
/// Config
///

pub struct Config {}

impl Config {
    pub(crate) fn get() -> Result<Arc<ConfigModel>, ConfigError> {
        CONFIG.with_borrow(|cell| cell.clone().ok_or(ConfigError::NotInitialized))
    }

    pub(crate) fn init_from_toml(toml: &str) -> Result<Arc<ConfigModel>, ConfigError> {
        let model: ConfigModel =
            toml::from_str(toml).map_err(|err| ConfigError::CannotParseToml(err.to_string()))?;

        model.validate()?;

        let model = Arc::new(model);
        CONFIG.with_borrow_mut(|cell| {
            if cell.is_some() {
                return Err(ConfigError::AlreadyInitialized);
            }

            *cell = Some(model.clone());

            Ok(model)
        })
    }

    /// Drop the active config (tests only).
    #[cfg(test)]
    pub(crate) fn reset() {
        CONFIG.with_borrow_mut(|cell| *cell = None);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const TOML: &str = r#"
        [data_api]
        hostname = "https://api.example.tld"

        [registry]
        gateway_url = "https://gw.example.tld"
        contract_address = "0xdead"
    "#;

    #[test]
    fn init_then_get() {
        Config::reset();

        assert!(matches!(Config::get(), Err(ConfigError::NotInitialized)));

        Config::init_from_toml(TOML).unwrap();
        let model = Config::get().unwrap();
        assert_eq!(model.data_api.hostname, "https://api.example.tld");
    }

    #[test]
    fn double_init_is_rejected() {
        Config::reset();

        Config::init_from_toml(TOML).unwrap();
        assert!(matches!(
            Config::init_from_toml(TOML),
            Err(ConfigError::AlreadyInitialized)
        ));
    }

    #[test]
    fn bad_toml_is_rejected() {
        Config::reset();

        assert!(matches!(
            Config::init_from_toml("data_api = 1"),
            Err(ConfigError::CannotParseToml(_))
        ));
    }
}
