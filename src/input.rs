//! Splitting of the `<address>[/<prefix>]` command argument.

use crate::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ADDR_CIDR: Regex =
        Regex::new(r"^(?P<addr>[^/]*)(?:/(?P<prefix>[^/]*))?$").expect("Invalid Regex?");
}

/// Split `"10.0.0.1/8"` into `("10.0.0.1", Some("8"))`.
///
/// A missing or empty prefix yields `None`; the caller falls back to the
/// classful default.
pub fn split_input(input: &str) -> Result<(&str, Option<&str>), ParseError> {
    let input = input.trim();
    let caps = ADDR_CIDR.captures(input).ok_or_else(|| {
        ParseError::InvalidAddressFormat(format!("too many '/' separators in '{input}'"))
    })?;

    let addr = caps.name("addr").map_or("", |m| m.as_str());
    let prefix = caps
        .name("prefix")
        .map(|m| m.as_str())
        .filter(|p| !p.is_empty());
    log::trace!("split_input({input}) addr={addr} prefix={prefix:?}");
    Ok((addr, prefix))
}
