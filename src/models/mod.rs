//! Domain models for the subnet calculator.
//!
//! - `ipv4` codec: parse, render and offset addresses held as `u32`, plus mask arithmetic
//! - [`SubnetInfo`] - the calculation result

mod ipv4;
mod subnet_info;

// Re-export public types
pub use ipv4::{
    cut_addr, get_cidr_mask, num_hosts, offset_addr, parse_addr, render_addr,
    PrefixLength, MAX_LENGTH,
};
pub use subnet_info::SubnetInfo;
