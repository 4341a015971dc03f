//! IPv4 subnet calculator and the small HTTP service around it.
//!
//! [`compute_subnet`] is the whole calculation: a pure function from an address and a
//! prefix length to a [`SubnetInfo`]. The [`api`] module exposes it over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod processing;

pub use config::Config;
pub use error::CalcError;
pub use models::SubnetInfo;
pub use processing::compute_subnet;
