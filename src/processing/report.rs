//! Complete calculation for one command argument.

use super::classify::{net_status, NetStatus};
use super::network::{
    broadcast_address, default_prefix_for, host_count, host_max, host_min, network_address,
    AddressClass,
};
use crate::error::ParseError;
use crate::input::split_input;
use crate::models::{Address, Netmask};
use serde::Serialize;

/// Everything derived from an address and netmask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub address: Address,
    pub netmask: Netmask,
    /// True when no prefix was given and the classful default was used.
    pub prefix_defaulted: bool,
    pub network: Address,
    pub broadcast: Address,
    pub host_min: Option<Address>,
    pub host_max: Option<Address>,
    pub host_count: u64,
    pub class: AddressClass,
    pub status: NetStatus,
}

impl Report {
    pub fn new(address: Address, netmask: Netmask, prefix_defaulted: bool) -> Report {
        Report {
            address,
            netmask,
            prefix_defaulted,
            network: network_address(address, netmask),
            broadcast: broadcast_address(address, netmask),
            host_min: host_min(address, netmask),
            host_max: host_max(address, netmask),
            host_count: host_count(netmask),
            class: AddressClass::of(address),
            status: net_status(address, netmask),
        }
    }
}

/// Parse `<dotted-quad>[/<prefix>]` and derive the full [`Report`].
///
/// # Examples
/// ```
/// let report = ipcalc::calculate("192.168.1.10/24").unwrap();
/// assert_eq!(report.network.to_string(), "192.168.1.0");
/// assert_eq!(report.host_count, 254);
/// ```
pub fn calculate(input: &str) -> Result<Report, ParseError> {
    let (addr_text, prefix_text) = split_input(input)?;
    let address = Address::parse(addr_text)?;

    let (netmask, prefix_defaulted) = match prefix_text {
        Some(prefix) => (Netmask::parse_prefix(prefix)?, false),
        None => {
            let prefix = default_prefix_for(address);
            log::info!("No prefix given for {address}, using classful default /{prefix}");
            (Netmask::new(prefix)?, true)
        }
    };

    let report = Report::new(address, netmask, prefix_defaulted);
    log::debug!(
        "calculate({input}) network={} broadcast={} hosts={}",
        report.network,
        report.broadcast,
        report.host_count
    );
    Ok(report)
}
