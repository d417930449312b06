use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("data_api.hostname must not be empty")]
    EmptyHostname,

    #[error("registry.gateway_url must not be empty")]
    EmptyGatewayUrl,

    #[error("registry.contract_address must be 0x-prefixed hex: '{0}'")]
    InvalidContractAddress(String),
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///
/// Top-level schema of the embedded TOML configuration.
///

#[derive(Clone, Debug, Deserialize)]
pub struct ConfigModel {
    pub data_api: DataApiConfig,
    pub registry: RegistryConfig,
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.data_api.validate()?;
        self.registry.validate()?;

        Ok(())
    }
}

///
/// DataApiConfig
///

#[derive(Clone, Debug, Deserialize)]
pub struct DataApiConfig {
    pub hostname: String,
}

impl DataApiConfig {
    /// Hostname without a trailing slash, ready for path concatenation.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.hostname.trim_end_matches('/')
    }
}

impl Validate for DataApiConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.hostname.trim().is_empty() {
            return Err(ConfigSchemaError::EmptyHostname);
        }

        Ok(())
    }
}

///
/// RegistryConfig
///

#[derive(Clone, Debug, Deserialize)]
pub struct RegistryConfig {
    pub gateway_url: String,
    pub contract_address: String,
}

impl RegistryConfig {
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.gateway_url.trim_end_matches('/')
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.gateway_url.trim().is_empty() {
            return Err(ConfigSchemaError::EmptyGatewayUrl);
        }

        let digits = self
            .contract_address
            .strip_prefix("0x")
            .ok_or_else(|| ConfigSchemaError::InvalidContractAddress(self.contract_address.clone()))?;

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigSchemaError::InvalidContractAddress(
                self.contract_address.clone(),
            ));
        }

        Ok(())
    }
}

///
/// TESTS
///
