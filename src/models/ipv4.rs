//! IPv4 address codec and mask arithmetic.
//!
//! Addresses are handled as their canonical `u32` value (most significant octet first).
//! Everything here is closed-form: no function walks the addresses of a subnet.

use crate::error::CalcError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// A CIDR prefix length, guaranteed to be within `0..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Validate a raw prefix length.
    pub fn new(len: i64) -> Result<PrefixLength, CalcError> {
        if (0..=i64::from(MAX_LENGTH)).contains(&len) {
            Ok(PrefixLength(len as u8))
        } else {
            Err(CalcError::InvalidPrefix(len.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of host bits left after the prefix.
    pub fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }
}

impl TryFrom<i64> for PrefixLength {
    type Error = CalcError;

    fn try_from(len: i64) -> Result<Self, Self::Error> {
        PrefixLength::new(len)
    }
}

impl FromStr for PrefixLength {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len: i64 = s
            .parse()
            .map_err(|_| CalcError::InvalidPrefix(s.to_string()))?;
        PrefixLength::new(len)
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a dotted-quad address.
///
/// Only the canonical form is accepted: four decimal octets in `0..=255` joined by single
/// dots, with no leading zeros or surrounding whitespace.
///
/// # Examples
/// ```
/// use ipcalc::models::parse_addr;
/// assert_eq!(parse_addr("10.0.0.1").unwrap(), 0x0A000001);
/// assert!(parse_addr("10.0.0.01").is_err());
/// ```
pub fn parse_addr(text: &str) -> Result<u32, CalcError> {
    let addr =
        Ipv4Addr::from_str(text).map_err(|_| CalcError::InvalidAddress(text.to_string()))?;
    // Rendering must give back the exact input, anything else is a non-canonical spelling.
    if addr.to_string() != text {
        return Err(CalcError::InvalidAddress(text.to_string()));
    }
    Ok(u32::from(addr))
}

/// Render an address as four dot-separated decimal octets.
pub fn render_addr(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Address `delta` positions after `base`, wrapping modulo 2^32.
///
/// # Examples
/// ```
/// use ipcalc::models::{offset_addr, parse_addr, render_addr};
/// let base = parse_addr("192.168.0.0").unwrap();
/// assert_eq!(render_addr(offset_addr(base, 510)), "192.168.1.254");
/// ```
pub fn offset_addr(base: u32, delta: u32) -> u32 {
    base.wrapping_add(delta)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipcalc::models::{get_cidr_mask, PrefixLength};
/// assert_eq!(get_cidr_mask(PrefixLength::new(24).unwrap()), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: PrefixLength) -> u32 {
    let right_len = len.host_bits();
    let all_bits = u32::MAX as u64;

    // Shift in 64 bits, a u32 shift by 32 overflows at prefix 0.
    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: u32, len: PrefixLength) -> u32 {
    addr & get_cidr_mask(len)
}

/// Total number of addresses covered by the prefix, `2^(32 - len)`.
///
/// Returned as u64 since a /0 covers 2^32 addresses.
pub fn num_hosts(len: PrefixLength) -> u64 {
    1u64 << len.host_bits()
}
