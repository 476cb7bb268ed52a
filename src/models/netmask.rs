//! CIDR netmask value.

use super::{mask_bits, Address, DottedQuad, MAX_LENGTH};
use crate::error::ParseError;
use serde::Serialize;

/// Contiguous netmask built from a prefix length (0-32).
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize)]
pub struct Netmask {
    prefix: u8,
    mask: Address,
}

impl Netmask {
    /// Create a netmask with `prefix` leading one bits.
    pub fn new(prefix: u8) -> Result<Netmask, ParseError> {
        if prefix > MAX_LENGTH {
            return Err(ParseError::CidrOutOfRange(prefix as i64));
        }
        Ok(Netmask {
            prefix,
            mask: Address::from(mask_bits(prefix)),
        })
    }

    /// Parse the text after the `/`, e.g. `"24"`.
    pub fn parse_prefix(prefix: &str) -> Result<Netmask, ParseError> {
        let value: i64 = prefix
            .parse()
            .map_err(|_| ParseError::CidrNotNumeric(prefix.to_string()))?;
        if !(0..=MAX_LENGTH as i64).contains(&value) {
            return Err(ParseError::CidrOutOfRange(value));
        }
        Netmask::new(value as u8)
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> Address {
        self.mask
    }
}

impl DottedQuad for Netmask {
    fn bits(&self) -> u32 {
        self.mask.value()
    }
}

impl std::fmt::Display for Netmask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} = {}", self.mask, self.prefix)
    }
}
