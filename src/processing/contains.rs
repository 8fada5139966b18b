//! Address containment checks.

use crate::error::{CidrError, Result};
use crate::models::CidrBlock;
use std::net::Ipv4Addr;

/// Check whether `address` lies within `block`.
///
/// # Arguments
/// * `block` - An already-parsed CIDR block
/// * `address` - IPv4 dotted-quad text
///
/// # Returns
/// * `Ok(bool)` - Whether the address is in the block's aligned range
/// * `Err(CidrError::InvalidAddress)` - If `address` is not an IPv4 literal
pub fn cidr_contains(block: &CidrBlock, address: &str) -> Result<bool> {
    let addr: Ipv4Addr = address.parse().map_err(|_| {
        log::debug!("Invalid IP address for containment check: {address:?}");
        CidrError::invalid_address(address)
    })?;
    Ok(block.contains(addr))
}
