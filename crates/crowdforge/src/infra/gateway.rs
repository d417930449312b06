use crate::{
    Error,
    dto::{Uint128PartsDto, UserInformationDto},
    ids::AccountAddress,
    infra::{
        InfraError,
        http::HttpTransport,
    },
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const CALL_CONTRACT_PATH: &str = "/feeder_gateway/call_contract";
const GET_USER_INFORMATION: &str = "get_user_information";

///
/// ProfileRegistry
///
/// The one read this crate needs from the on-chain profile registry:
/// `get_user_information(address)`. Production code goes through the
/// gateway implementation below; tests script the trait directly.
///

#[async_trait]
pub trait ProfileRegistry: Send + Sync {
    async fn get_user_information(
        &self,
        address: &AccountAddress,
    ) -> Result<Vec<UserInformationDto>, InfraError>;
}

///
/// GatewayProfileRegistry
///
/// Read-only `call_contract` against the network gateway. The reply is the
/// contract's flat felt sequence; for `get_user_information` that is the
/// `(low, high)` pair of the stored contributor id, in declaration order.
///

pub struct GatewayProfileRegistry {
    transport: Arc<dyn HttpTransport>,
    gateway_url: String,
    contract_address: String,
}

impl GatewayProfileRegistry {
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        gateway_url: impl Into<String>,
        contract_address: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            gateway_url: gateway_url.into(),
            contract_address: contract_address.into(),
        }
    }

    /// Build from the active process config.
    pub fn from_config(transport: Arc<dyn HttpTransport>) -> Result<Self, Error> {
        let config = crate::config::Config::get()?;

        Ok(Self::new(
            transport,
            config.registry.base_url(),
            config.registry.contract_address.clone(),
        ))
    }

    fn call_url(&self) -> String {
        format!("{}{CALL_CONTRACT_PATH}", self.gateway_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProfileRegistry for GatewayProfileRegistry {
    async fn get_user_information(
        &self,
        address: &AccountAddress,
    ) -> Result<Vec<UserInformationDto>, InfraError> {
        let body = json!({
            "contract_address": self.contract_address,
            "entry_point_selector": GET_USER_INFORMATION,
            "calldata": [address.as_str()],
        });

        let response = self.transport.post_json(&self.call_url(), &body).await?;
        if response.status != 200 {
            return Err(InfraError::UnexpectedStatus(response.status));
        }

        let reply: CallContractReply = response.json()?;

        // an unknown address yields an empty felt sequence, not an error
        if reply.result.is_empty() {
            return Ok(Vec::new());
        }

        let [low, high] = reply.result.as_slice() else {
            return Err(InfraError::MalformedReply(format!(
                "expected 2 felts from {GET_USER_INFORMATION}, got {}",
                reply.result.len()
            )));
        };

        Ok(vec![UserInformationDto {
            contributor_id: Uint128PartsDto::new(low.clone(), high.clone()),
        }])
    }
}

///
/// CallContractReply
///

#[derive(Debug, Deserialize)]
struct CallContractReply {
    result: Vec<String>,
}

///
/// TESTS
///
