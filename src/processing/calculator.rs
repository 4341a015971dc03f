//! Subnet calculation.
//!
//! Derives every attribute of the subnet containing an address with closed-form `u32`
//! arithmetic, so a /0 costs the same as a /30.

use crate::error::CalcError;
use crate::models::{
    cut_addr, get_cidr_mask, num_hosts, offset_addr, parse_addr, render_addr, PrefixLength,
    SubnetInfo,
};

/// The three ways a prefix splits network and host addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubnetClass {
    /// /32: a single address, no separate network or broadcast.
    HostRoute,
    /// /31: two usable addresses, no broadcast (RFC 3021).
    PointToPoint,
    /// /0 to /30: network and broadcast reserved, the rest usable.
    General,
}

impl SubnetClass {
    pub fn of(len: PrefixLength) -> SubnetClass {
        match len.get() {
            32 => SubnetClass::HostRoute,
            31 => SubnetClass::PointToPoint,
            _ => SubnetClass::General,
        }
    }
}

/// Compute the subnet containing `address` for the given prefix length.
///
/// The prefix is validated first, then the address; on error nothing is computed.
///
/// # Arguments
/// * `address` - canonical dotted-quad address, need not be the network address
/// * `prefix_len` - prefix length, must be in `0..=32`
///
/// # Returns
/// * `Ok(SubnetInfo)` - fully populated result
/// * `Err(CalcError::InvalidPrefix)` or `Err(CalcError::InvalidAddress)`
///
/// # Examples
/// ```
/// use ipcalc::compute_subnet;
/// let info = compute_subnet("192.168.0.100", 24).unwrap();
/// assert_eq!(info.network_cidr, "192.168.0.0/24");
/// assert_eq!(info.broadcast.as_deref(), Some("192.168.0.255"));
/// ```
pub fn compute_subnet(address: &str, prefix_len: i64) -> Result<SubnetInfo, CalcError> {
    let len = PrefixLength::try_from(prefix_len)?;
    let addr = parse_addr(address)?;
    Ok(subnet_info(addr, len))
}

/// Build the [`SubnetInfo`] for an already validated address and prefix length.
pub fn subnet_info(addr: u32, len: PrefixLength) -> SubnetInfo {
    let mask = get_cidr_mask(len);
    let network = cut_addr(addr, len);
    let hosts_total = num_hosts(len);

    let (host_min, host_max, broadcast, hosts_available) = match SubnetClass::of(len) {
        SubnetClass::HostRoute => (addr, addr, None, 1),
        SubnetClass::PointToPoint => (network, offset_addr(network, 1), None, 2),
        SubnetClass::General => {
            // Offsets stay u64 until here; at /0 they only fit u32 after truncation,
            // and the wrapping add lands on the right address.
            let last = offset_addr(network, (hosts_total - 1) as u32);
            let before_last = offset_addr(network, (hosts_total - 2) as u32);
            (
                offset_addr(network, 1),
                before_last,
                Some(last),
                hosts_total - 2,
            )
        }
    };

    log::debug!(
        "subnet_info({}/{}) network={} class={:?}",
        render_addr(addr),
        len,
        render_addr(network),
        SubnetClass::of(len)
    );

    SubnetInfo {
        address: render_addr(addr),
        prefix_length: len.get(),
        netmask: render_addr(mask),
        network_address: render_addr(network),
        network_cidr: format!("{}/{}", render_addr(network), len),
        host_min: render_addr(host_min),
        host_max: render_addr(host_max),
        broadcast: broadcast.map(render_addr),
        hosts_total,
        hosts_available,
    }
}
