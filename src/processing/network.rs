//! Network arithmetic over an address and a netmask.
//!
//! All functions are pure: they read their inputs and return new values.

use crate::models::{Address, DottedQuad, Netmask, MAX_LENGTH};
use serde::{Serialize, Serializer};

/// Address with all host bits cleared.
pub fn network_address(ip: Address, nm: Netmask) -> Address {
    Address::from(ip.value() & nm.mask().value())
}

/// Address with all host bits set.
pub fn broadcast_address(ip: Address, nm: Netmask) -> Address {
    Address::from(ip.value() | !nm.mask().value())
}

/// First usable host, `None` for /31 and /32 which have no host range.
pub fn host_min(ip: Address, nm: Netmask) -> Option<Address> {
    if nm.prefix() >= MAX_LENGTH - 1 {
        return None;
    }
    Some(Address::from_integer(
        network_address(ip, nm).value() as u64 + 1,
    ))
}

/// Last usable host, `None` for /31 and /32.
pub fn host_max(ip: Address, nm: Netmask) -> Option<Address> {
    if nm.prefix() >= MAX_LENGTH - 1 {
        return None;
    }
    Some(Address::from_integer(
        broadcast_address(ip, nm).value() as u64 - 1,
    ))
}

/// Number of usable hosts: `2^(32-prefix) - 2`, floored at 0 for /31 and /32.
pub fn host_count(nm: Netmask) -> u64 {
    (1u64 << (MAX_LENGTH - nm.prefix())).saturating_sub(2)
}

/// Classful prefix used when the input carries no `/prefix`.
pub fn default_prefix_for(addr: Address) -> u8 {
    addr.default_prefix()
}

/// Legacy address class letter, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    A,
    B,
    C,
    Unknown,
}

impl AddressClass {
    pub fn of(addr: Address) -> AddressClass {
        match default_prefix_for(addr) {
            8 => AddressClass::A,
            16 => AddressClass::B,
            24 => AddressClass::C,
            _ => AddressClass::Unknown,
        }
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressClass::A => write!(f, "A"),
            AddressClass::B => write!(f, "B"),
            AddressClass::C => write!(f, "C"),
            AddressClass::Unknown => write!(f, "Unknown class"),
        }
    }
}

impl Serialize for AddressClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
