//!
//! Strongly-typed identifiers shared across the ops and workflow layers.
//! String-backed wrappers use `Cow<'static, str>` so known constants stay
//! zero-copy while dynamic values allocate only when needed.
//!

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, str::FromStr};

///
/// ContributionId
///
/// Identifier of a contribution open for application (e.g. "1").
///

#[derive(
    Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct ContributionId(pub Cow<'static, str>);

impl ContributionId {
    #[must_use]
    pub const fn new(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    #[must_use]
    pub const fn owned(s: String) -> Self {
        Self(Cow::Owned(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContributionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::owned(s.to_string()))
    }
}

impl From<&'static str> for ContributionId {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for ContributionId {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

///
/// ContributorId
///
/// Numeric actor identifier. Transported as a `0x` hex string; stored
/// on-chain split into two 64-bit halves of one 128-bit value.
///

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct ContributorId(pub u128);

impl ContributorId {
    #[must_use]
    pub const fn new(id: u128) -> Self {
        Self(id)
    }

    /// Render in the data API's wire form, e.g. `0x26`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{self}")
    }

    /// Parse the wire form; the `0x` prefix is optional.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let digits = s.strip_prefix("0x").unwrap_or(s);

        u128::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| format!("invalid contributor id hex: {s}"))
    }

    #[must_use]
    pub const fn get(self) -> u128 {
        self.0
    }
}

impl std::fmt::Display for ContributorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl From<u128> for ContributorId {
    fn from(id: u128) -> Self {
        Self(id)
    }
}

///
/// AccountAddress
///
/// Wallet address of the session actor, as handed over by the wallet
/// connection. Treated as an opaque string and passed through to the
/// registry contract unmodified.
///

#[derive(
    Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct AccountAddress(pub Cow<'static, str>);

impl AccountAddress {
    #[must_use]
    pub const fn new(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    #[must_use]
    pub const fn owned(s: String) -> Self {
        Self(Cow::Owned(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for AccountAddress {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contributor_id_round_trips_hex() {
        let id = ContributorId::new(0x26);
        assert_eq!(id.to_hex(), "0x26");
        assert_eq!(ContributorId::from_hex("0x26").unwrap(), id);
        assert_eq!(ContributorId::from_hex("26").unwrap(), id);
    }

    #[test]
    fn contributor_id_rejects_garbage() {
        assert!(ContributorId::from_hex("0xzz").is_err());
        assert!(ContributorId::from_hex("").is_err());
    }

    #[test]
    fn contribution_id_is_transparent_over_strings() {
        let id: ContributionId = "1".into();
        assert_eq!(id.as_str(), "1");
        assert_eq!("1".parse::<ContributionId>().unwrap(), id);
    }
}
