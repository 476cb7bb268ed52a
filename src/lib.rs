//! IPv4 network calculator.
//!
//! Derives network, broadcast, usable host range, host count and a
//! public/private classification from `<dotted-quad>[/<prefix>]`.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::ParseError;
pub use models::{Address, DottedQuad, Netmask};
pub use processing::{calculate, Report};
