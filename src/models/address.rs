//! IPv4 address value.

use super::DottedQuad;
use crate::error::ParseError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 address stored as a big-endian 32-bit value.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Address {
    value: u32,
}

impl Address {
    /// Parse a dotted quad such as `"192.168.1.10"`.
    ///
    /// Exactly four non-empty decimal octets in 0-255 are accepted.
    pub fn parse(dotted_quad: &str) -> Result<Address, ParseError> {
        let segments: Vec<&str> = dotted_quad.split('.').collect();
        if segments.len() != 4 {
            return Err(ParseError::InvalidAddressFormat(format!(
                "expected 4 octets, found {} in '{dotted_quad}'",
                segments.len()
            )));
        }

        let mut value = 0u32;
        for (i, segment) in segments.iter().enumerate() {
            let octet = parse_octet(segment, i + 1)?;
            value |= octet << (24 - 8 * i);
        }
        log::trace!("parsed {dotted_quad} as {value:#010x}");
        Ok(Address { value })
    }

    /// Build from a computed value, keeping only the low 32 bits.
    pub fn from_integer(raw: u64) -> Address {
        Address {
            value: (raw & 0xFFFF_FFFF) as u32,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

fn parse_octet(segment: &str, position: usize) -> Result<u32, ParseError> {
    if segment.is_empty() {
        return Err(ParseError::InvalidAddressFormat(format!(
            "octet {position} is empty"
        )));
    }
    if let Some(c) = segment.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseError::InvalidAddressFormat(format!(
            "illegal character '{c}' in octet {position}"
        )));
    }
    // more than three digits can't be a valid octet, and keeps parse() from overflowing
    let out_of_range = || {
        ParseError::InvalidAddressFormat(format!(
            "octet {position} ({segment}) is out of range 0-255"
        ))
    };
    if segment.len() > 3 {
        return Err(out_of_range());
    }
    let octet: u32 = segment.parse().map_err(|_| out_of_range())?;
    if octet > 255 {
        return Err(out_of_range());
    }
    Ok(octet)
}

impl DottedQuad for Address {
    fn bits(&self) -> u32 {
        self.value
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Address { value }
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Address {
            value: u32::from_be_bytes(octets),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address {
            value: u32::from(addr),
        }
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.value)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_dotted_decimal())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_dotted_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid(input: &str) -> bool {
        matches!(
            Address::parse(input),
            Err(ParseError::InvalidAddressFormat(_))
        )
    }

    #[test]
    fn test_parse_packs_big_endian() {
        let addr = Address::parse("192.168.1.10").unwrap();
        assert_eq!(addr.value(), 0xC0A8010A);
        assert_eq!(Address::parse("0.0.0.0").unwrap().value(), 0);
        assert_eq!(
            Address::parse("255.255.255.255").unwrap().value(),
            u32::MAX
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for s in ["1.2.3.4", "10.0.0.1", "172.16.254.3", "255.0.255.0", "0.0.0.0"] {
            assert_eq!(Address::parse(s).unwrap().to_dotted_decimal(), s);
        }
    }

    #[test]
    fn test_parse_leading_zeros() {
        let addr: Address = "010.001.000.009".parse().unwrap();
        assert_eq!(addr.to_string(), "10.1.0.9");
    }

    #[test]
    fn test_parse_rejects() {
        assert!(is_invalid("999.1.1.1"));
        assert!(is_invalid("256.0.0.0"));
        assert!(is_invalid("1.2.3"));
        assert!(is_invalid("1.2.3.4.5"));
        assert!(is_invalid("1..3.4"));
        assert!(is_invalid("1.2.3."));
        assert!(is_invalid(""));
        assert!(is_invalid("a.b.c.d"));
        assert!(is_invalid("1.2.3.-4"));
        assert!(is_invalid("1.2.3.+4"));
        assert!(is_invalid(" 1.2.3.4"));
        assert!(is_invalid("1.2.3.0004"));
        assert!(is_invalid("99999999999999999999.1.1.1"));
    }

    #[test]
    fn test_parse_error_reason() {
        let err = Address::parse("1.2.x.4").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal address format: illegal character 'x' in octet 3"
        );
        let err = Address::parse("1.2.3").unwrap_err();
        assert!(err.to_string().contains("expected 4 octets, found 3"));
        let err = Address::parse("1.300.3.4").unwrap_err();
        assert!(err.to_string().contains("octet 2 (300) is out of range"));
    }

    #[test]
    fn test_from_integer_masks() {
        assert_eq!(Address::from_integer(0x1_0000_0001).value(), 1);
        assert_eq!(Address::from_integer(u64::MAX).value(), u32::MAX);
        for v in [0u64, 1, 0xFFFF_FFFF, 0x1234_5678_9ABC, u64::MAX] {
            assert_eq!(
                Address::from_integer(v).value() as u64,
                v & 0xFFFF_FFFF
            );
        }
    }

    #[test]
    fn test_conversions() {
        let addr = Address::from([10, 0, 0, 1]);
        assert_eq!(addr, Address::from(0x0A000001));
        assert_eq!(Ipv4Addr::from(addr), Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(Address::from(Ipv4Addr::new(10, 0, 0, 1)), addr);
        assert!(Address::from(1) < Address::from(2));
    }

    #[test]
    fn test_serialize_as_string() {
        let addr = Address::parse("8.8.4.4").unwrap();
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"8.8.4.4\"");
    }
}
