//! Overlapping CIDR detection.
//!
//! Ranges are sorted by start address and only neighbours are compared: if
//! any two ranges overlap then some pair of neighbours in that order does too.

use crate::models::{AddrRange, CidrBlock};
use itertools::Itertools;

/// Aligned ranges of `blocks`, sorted by start address.
fn sorted_ranges(blocks: &[CidrBlock]) -> Vec<(AddrRange, CidrBlock)> {
    let mut ranges: Vec<(AddrRange, CidrBlock)> =
        blocks.iter().map(|b| (b.range(), *b)).collect();
    ranges.sort_by_key(|(r, _)| r.start);
    log::trace!(
        "sorted ranges: {:?}",
        ranges.iter().map(|(r, _)| r.to_string()).collect::<Vec<_>>()
    );
    ranges
}

/// Returns true if at least one block overlaps another.
///
/// Identical blocks and blocks nested in one another overlap. Blocks that are
/// merely adjacent (`10.0.0.0/24`, `10.0.1.0/24`) do not.
/// An empty or single-element list never overlaps.
pub fn any_overlap(blocks: &[CidrBlock]) -> bool {
    sorted_ranges(blocks)
        .iter()
        .tuple_windows()
        .any(|((prev, _), (next, _))| next.start <= prev.end)
}

/// Neighbouring pairs (in start-address order) that overlap.
///
/// Empty exactly when [`any_overlap`] is false. Not every overlapping pair is
/// listed, only the ones the sweep sees.
pub fn overlapping_pairs(blocks: &[CidrBlock]) -> Vec<(CidrBlock, CidrBlock)> {
    let pairs: Vec<(CidrBlock, CidrBlock)> = sorted_ranges(blocks)
        .iter()
        .tuple_windows()
        .filter(|((prev, _), (next, _))| next.start <= prev.end)
        .map(|((_, a), (_, b))| (*a, *b))
        .collect();
    for (a, b) in &pairs {
        log::debug!("CIDR {a} overlaps {b}");
    }
    pairs
}
