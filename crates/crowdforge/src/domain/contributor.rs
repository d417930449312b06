use crate::{dto::Uint128PartsDto, ids::ContributorId};
use thiserror::Error as ThisError;

///
/// ContributorError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ContributorError {
    #[error("invalid felt hex '{0}'")]
    InvalidFeltHex(String),

    #[error("felt half does not fit in 64 bits: '{0}'")]
    FeltOverflow(String),
}

/// Parse one 64-bit half of an on-chain contributor id. The `0x` prefix is
/// optional; anything that does not fit a u64 is an overflow, not a
/// truncation.
pub fn parse_felt_half(felt: &str) -> Result<u64, ContributorError> {
    let digits = felt.strip_prefix("0x").unwrap_or(felt);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ContributorError::InvalidFeltHex(felt.to_string()));
    }

    u64::from_str_radix(digits, 16).map_err(|_| ContributorError::FeltOverflow(felt.to_string()))
}

/// Reconstruct the full 128-bit contributor id from its halves.
///
/// Exact unsigned arithmetic only: `(high << 64) | low`. Rebuilding this
/// through a float would silently lose precision above 2^53.
#[must_use]
pub const fn reconstruct(low: u64, high: u64) -> ContributorId {
    ContributorId::new(((high as u128) << 64) | low as u128)
}

/// Decode the wire form of an on-chain contributor id.
pub fn from_parts(parts: &Uint128PartsDto) -> Result<ContributorId, ContributorError> {
    let low = parse_felt_half(&parts.low)?;
    let high = parse_felt_half(&parts.high)?;

    Ok(reconstruct(low, high))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_low_only_values() {
        assert_eq!(reconstruct(0x26, 0x0), ContributorId::new(0x26));
    }

    #[test]
    fn reconstructs_across_the_64_bit_boundary() {
        let id = reconstruct(0x1, 0x1);
        assert_eq!(id.get(), (1u128 << 64) | 1);

        let max = reconstruct(u64::MAX, u64::MAX);
        assert_eq!(max.get(), u128::MAX);
    }

    #[test]
    fn parses_wire_parts() {
        let parts = Uint128PartsDto::new("0x26", "0x0");
        assert_eq!(from_parts(&parts).unwrap(), ContributorId::new(0x26));

        // bare hex is accepted too
        let parts = Uint128PartsDto::new("26", "0");
        assert_eq!(from_parts(&parts).unwrap(), ContributorId::new(0x26));
    }

    #[test]
    fn rejects_malformed_parts() {
        let parts = Uint128PartsDto::new("0xnope", "0x0");
        assert!(matches!(
            from_parts(&parts),
            Err(ContributorError::InvalidFeltHex(_))
        ));

        let parts = Uint128PartsDto::new("", "0x0");
        assert!(matches!(
            from_parts(&parts),
            Err(ContributorError::InvalidFeltHex(_))
        ));
    }

    #[test]
    fn rejects_halves_wider_than_64_bits() {
        let parts = Uint128PartsDto::new("0x1ffffffffffffffff", "0x0");
        assert!(matches!(
            from_parts(&parts),
            Err(ContributorError::FeltOverflow(_))
        ));
    }
}
