use crate::dto::prelude::*;

///
/// UserInformationDto
///
/// Reply record of the registry contract's `get_user_information` entry
/// point. The contract returns a sequence of records; current deployments
/// emit exactly one per known address.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserInformationDto {
    pub contributor_id: Uint128PartsDto,
}

///
/// Uint128PartsDto
///
/// A 128-bit value split across two 64-bit halves, each transported as a
/// hex felt string (e.g. `{"low": "0x26", "high": "0x0"}`).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Uint128PartsDto {
    pub low: String,
    pub high: String,
}

impl Uint128PartsDto {
    #[must_use]
    pub fn new(low: impl Into<String>, high: impl Into<String>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }
}
