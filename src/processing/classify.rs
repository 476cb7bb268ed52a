//! Public/private classification of addresses and networks.

use crate::models::{mask_bits, Address, DottedQuad, Netmask};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Private,
    Loopback,
    Public,
}

/// (network, prefix, label); anything unmatched is public.
const RANGES: [(u32, u8, Classification); 4] = [
    (0x0A00_0000, 8, Classification::Private),  // 10.0.0.0/8
    (0xAC10_0000, 12, Classification::Private), // 172.16.0.0/12
    (0xC0A8_0000, 16, Classification::Private), // 192.168.0.0/16
    (0x7F00_0000, 8, Classification::Loopback), // 127.0.0.0/8
];

pub fn classify(addr: Address) -> Classification {
    RANGES
        .iter()
        .find(|(network, prefix, _)| addr.value() & mask_bits(*prefix) == *network)
        .map(|(_, _, label)| *label)
        .unwrap_or(Classification::Public)
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            Classification::Private => "private",
            Classification::Loopback => "loopback",
            Classification::Public => "public",
        };
        write!(f, "{label}")
    }
}

/// Classification of a whole network, from both of its ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetStatus {
    Single(Classification),
    /// Network and broadcast address fall in different ranges.
    Mixed,
}

impl std::fmt::Display for NetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NetStatus::Single(label) => write!(f, "{label}"),
            NetStatus::Mixed => write!(f, "in part private and public"),
        }
    }
}

impl Serialize for NetStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Classify the first and last address of the network octet by octet.
pub fn net_status(ip: Address, nm: Netmask) -> NetStatus {
    let ip_octets = ip.octets();
    let mask_octets = nm.octets();

    let mut low = [0u8; 4];
    let mut high = [0u8; 4];
    for (i, (octet, mask)) in ip_octets.iter().zip(mask_octets).enumerate() {
        low[i] = octet & mask;
        high[i] = octet | !mask;
    }

    let low = classify(Address::from(low));
    let high = classify(Address::from(high));
    log::debug!("net_status {ip}/{}: low={low} high={high}", nm.prefix());
    if low == high {
        NetStatus::Single(low)
    } else {
        NetStatus::Mixed
    }
}
