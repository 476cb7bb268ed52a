//! Calculator logic.
//!
//! - [`network`] - network/broadcast/host range arithmetic
//! - [`classify`] - private/loopback/public ranges
//! - [`report`] - the full calculation for one argument

mod classify;
mod network;
mod report;

pub use classify::{classify, net_status, Classification, NetStatus};
pub use network::{
    broadcast_address, default_prefix_for, host_count, host_max, host_min, network_address,
    AddressClass,
};
pub use report::{calculate, Report};
