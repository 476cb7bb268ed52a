//! Value types for the calculator.
//!
//! - [`Address`] - IPv4 address as a 32-bit value
//! - [`Netmask`] - prefix length with its derived mask
//! - [`DottedQuad`] - decimal/binary rendering shared by both

mod address;
mod dotted_quad;
mod netmask;

pub use address::Address;
pub use dotted_quad::{mask_bits, DottedQuad, MAX_LENGTH};
pub use netmask::Netmask;
