//! Result of a subnet calculation.

use serde::{Deserialize, Serialize};

/// Everything derived from an address and a prefix length.
///
/// Serialises with camelCase field names. `broadcast` is left out of the JSON entirely
/// for /31 and /32, which have no broadcast address.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetInfo {
    /// The address as supplied by the caller.
    pub address: String,
    /// The prefix length (0-32).
    pub prefix_length: u8,
    /// Subnet mask in dotted-quad form.
    pub netmask: String,
    /// Address with all host bits cleared.
    pub network_address: String,
    /// Network address followed by `/prefix`.
    pub network_cidr: String,
    /// Lowest usable address.
    pub host_min: String,
    /// Highest usable address.
    pub host_max: String,
    /// Broadcast address, only for prefixes up to /30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<String>,
    /// Number of addresses covered by the prefix.
    pub hosts_total: u64,
    /// Number of addresses usable by hosts.
    pub hosts_available: u64,
}
