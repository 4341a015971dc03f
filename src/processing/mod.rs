//! Subnet calculation logic.
//!
//! - `calculator` - derives a [`crate::models::SubnetInfo`] from an address and prefix

mod calculator;

// Re-export public functions
pub use calculator::{compute_subnet, subnet_info, SubnetClass};
