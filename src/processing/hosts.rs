//! Usable host counting.

use crate::models::CidrBlock;

/// Number of usable host addresses in a block.
///
/// * `/31` - 2, point-to-point link (RFC 3021)
/// * `/32` - 1, single host
/// * otherwise - total minus network and broadcast
pub fn count_hosts(block: &CidrBlock) -> i64 {
    let total = block.size() as i64;
    match block.prefix_len() {
        31 => 2,
        32 => 1,
        _ if total > 2 => total - 2,
        _ => 0,
    }
}
