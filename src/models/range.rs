//! Inclusive IPv4 address range used for overlap and containment math.

use std::fmt;
use std::net::Ipv4Addr;

/// Inclusive `[start, end]` range of addresses as big-endian u32 values.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddrRange {
    pub start: u32,
    pub end: u32,
}

impl AddrRange {
    pub fn new(start: u32, end: u32) -> AddrRange {
        debug_assert!(start <= end, "range start {start} > end {end}");
        AddrRange { start, end }
    }

    pub fn contains(&self, addr: u32) -> bool {
        self.start <= addr && addr <= self.end
    }

    /// Two ranges overlap when they share at least one address.
    ///
    /// Bounds are inclusive, so `x.0.0.255` and `x.0.1.0` do not overlap.
    pub fn overlaps(&self, other: &AddrRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for AddrRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            Ipv4Addr::from(self.start),
            Ipv4Addr::from(self.end)
        )
    }
}
