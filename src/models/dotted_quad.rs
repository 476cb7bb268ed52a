//! Rendering shared by every 32-bit dotted-quad value.

use itertools::Itertools;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a contiguous mask as u32.
///
/// Callers validate `len <= MAX_LENGTH`; larger values are clamped.
///
/// # Examples
/// ```
/// use ipcalc::models::mask_bits;
/// assert_eq!(mask_bits(24), 0xFFFFFF00);
/// assert_eq!(mask_bits(0), 0);
/// ```
pub fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// A value that renders as four dot separated octets.
///
/// Implemented by [`Address`](super::Address) and [`Netmask`](super::Netmask).
pub trait DottedQuad {
    /// Raw 32-bit value, most significant octet first.
    fn bits(&self) -> u32;

    fn octets(&self) -> [u8; 4] {
        self.bits().to_be_bytes()
    }

    /// e.g. `192.168.1.10`, no leading zeros.
    fn to_dotted_decimal(&self) -> String {
        let bits = self.bits();
        (0..4u32)
            .map(|i| (bits >> (24 - 8 * i)) & 0xFF)
            .join(".")
    }

    /// e.g. `11000000.10101000.00000001.00001010`.
    fn to_dotted_binary(&self) -> String {
        self.octets()
            .iter()
            .map(|octet| format!("{octet:08b}"))
            .join(".")
    }

    /// Legacy classful prefix guessed from the first octet.
    ///
    /// Class A → 8, B → 16, C → 24. Everything else (0, 127, 224 and up)
    /// is treated as a host route. This never rejects an address.
    fn default_prefix(&self) -> u8 {
        match self.octets()[0] {
            1..=126 => 8,
            128..=191 => 16,
            192..=223 => 24,
            _ => MAX_LENGTH,
        }
    }
}
