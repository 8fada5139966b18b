//! IPv4 CIDR block parsing and range math.
//!
//! A [`CidrBlock`] always stores the network address, so `10.0.0.7/24`
//! parses to the same block as `10.0.0.0/24`.

use super::AddrRange;
use crate::error::{CidrError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 block (32 bits).
pub const MAX_PREFIX_LEN: u8 = 32;

/// Convert a prefix length to a netmask as u32.
///
/// Shifts through u64 so that `/0` does not overflow.
///
/// # Examples
/// ```
/// use pf_functions::models::netmask_bits;
/// assert_eq!(netmask_bits(24), 0xFFFFFF00);
/// assert_eq!(netmask_bits(0), 0);
/// ```
pub fn netmask_bits(prefix: u8) -> u32 {
    let right_len = MAX_PREFIX_LEN.saturating_sub(prefix.min(MAX_PREFIX_LEN));
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Parse a single `address/prefixLength` string into a [`CidrBlock`].
pub fn parse_cidr(text: &str) -> Result<CidrBlock> {
    CidrBlock::parse(text).map_err(|e| {
        log::debug!("{e}");
        e
    })
}

/// Parse a list of CIDR strings, failing on the first malformed entry.
pub fn parse_cidrs<S: AsRef<str>>(texts: &[S]) -> Result<Vec<CidrBlock>> {
    texts.iter().map(|t| parse_cidr(t.as_ref())).collect()
}

/// IPv4 network in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    network: Ipv4Addr,
    prefix: u8,
}

impl CidrBlock {
    /// Build a block from an address and prefix length, clearing host bits.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<CidrBlock> {
        if prefix > MAX_PREFIX_LEN {
            return Err(CidrError::invalid_cidr(
                &format!("{addr}/{prefix}"),
                "prefix length out of range",
            ));
        }
        let network = Ipv4Addr::from(u32::from(addr) & netmask_bits(prefix));
        Ok(CidrBlock { network, prefix })
    }

    /// Parse `address/prefixLength`.
    ///
    /// This is the only validation boundary: everything else on a
    /// [`CidrBlock`] assumes a well-formed block.
    pub fn parse(text: &str) -> Result<CidrBlock> {
        let (addr_part, prefix_part) = text
            .split_once('/')
            .ok_or_else(|| CidrError::invalid_cidr(text, "missing prefix length"))?;

        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| CidrError::invalid_cidr(text, "invalid IPv4 address"))?;

        if prefix_part.is_empty() || !prefix_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrError::invalid_cidr(text, "non-numeric prefix length"));
        }
        let prefix: u8 = prefix_part
            .parse()
            .map_err(|_| CidrError::invalid_cidr(text, "prefix length out of range"))?;
        if prefix > MAX_PREFIX_LEN {
            return Err(CidrError::invalid_cidr(text, "prefix length out of range"));
        }

        CidrBlock::new(addr, prefix)
    }

    /// The network address (all host bits cleared).
    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    /// The broadcast address (all host bits set).
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.range().end)
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(netmask_bits(self.prefix))
    }

    /// Total number of addresses in the block, network and broadcast included.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_PREFIX_LEN - self.prefix)
    }

    /// The inclusive address range covered by this block.
    pub fn range(&self) -> AddrRange {
        let mask = netmask_bits(self.prefix);
        let start = u32::from(self.network) & mask;
        AddrRange::new(start, start | !mask)
    }

    /// Check if an address falls within this block.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.range().contains(u32::from(addr))
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<CidrBlock> {
        CidrBlock::parse(s)
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_netmask_bits() {
        assert_eq!(netmask_bits(0), 0x00000000);
        assert_eq!(netmask_bits(8), 0xFF000000);
        assert_eq!(netmask_bits(16), 0xFFFF0000);
        assert_eq!(netmask_bits(24), 0xFFFFFF00);
        assert_eq!(netmask_bits(31), 0xFFFFFFFE);
        assert_eq!(netmask_bits(32), 0xFFFFFFFF);
    }

    #[test]
    fn test_parse_normalizes_host_bits() {
        let block = CidrBlock::parse("192.168.1.42/24").unwrap();
        assert_eq!(block.network(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(block.to_string(), "192.168.1.0/24");

        let block = CidrBlock::parse("10.2.3.4/16").unwrap();
        assert_eq!(block.to_string(), "10.2.0.0/16");

        let block = CidrBlock::parse("192.168.1.42/32").unwrap();
        assert_eq!(block.to_string(), "192.168.1.42/32");

        let block = CidrBlock::parse("203.0.113.9/0").unwrap();
        assert_eq!(block.to_string(), "0.0.0.0/0");
    }

    #[test]
    fn test_new_normalizes_host_bits() {
        let block = CidrBlock::new(Ipv4Addr::new(10, 1, 1, 17), 28).unwrap();
        assert_eq!(block, CidrBlock::parse("10.1.1.16/28").unwrap());
        assert!(CidrBlock::new(Ipv4Addr::new(10, 1, 1, 17), 33).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "10.0.0.0",
            "10.0.0.0/",
            "10.0.0.0/33",
            "10.0.0.0/256",
            "10.0.0.0/99999999999",
            "10.0.0.0/-1",
            "10.0.0.0/+8",
            "10.0.0.0/ 8",
            "10.0.0.0/8/8",
            "10.0.0/8",
            "10.0.0.256/8",
            "not-an-ip/8",
            " 10.0.0.0/8",
            "::1/128",
        ] {
            let err = CidrBlock::parse(bad).unwrap_err();
            assert!(
                matches!(err, CidrError::InvalidCidr { .. }),
                "expected InvalidCidr for {bad:?}"
            );
            assert_eq!(err.input(), bad);
        }
    }

    #[test]
    fn test_parse_cidrs_stops_at_first_error() {
        let blocks = parse_cidrs(&["10.0.0.0/16", "10.1.0.0/16"]).unwrap();
        assert_eq!(blocks.len(), 2);

        let err = parse_cidrs(&["10.0.0.0/16", "bogus", "10.0.0.0/99"]).unwrap_err();
        assert_eq!(err.input(), "bogus");

        assert!(parse_cidrs::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_broadcast_and_range() {
        let block = CidrBlock::parse("192.168.1.0/24").unwrap();
        assert_eq!(block.broadcast(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(block.netmask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(block.size(), 256);

        let block = CidrBlock::parse("192.168.1.0/8").unwrap();
        assert_eq!(block.broadcast(), Ipv4Addr::new(192, 255, 255, 255));

        let all = CidrBlock::parse("0.0.0.0/0").unwrap();
        assert_eq!(all.range(), AddrRange::new(0, u32::MAX));
        assert_eq!(all.size(), 1u64 << 32);

        let host = CidrBlock::parse("255.255.255.255/32").unwrap();
        assert_eq!(host.range(), AddrRange::new(u32::MAX, u32::MAX));
    }

    #[test]
    fn test_contains() {
        let block = CidrBlock::parse("10.0.10.0/24").unwrap();
        assert!(block.contains(Ipv4Addr::new(10, 0, 10, 0)));
        assert!(block.contains(Ipv4Addr::new(10, 0, 10, 255)));
        assert!(!block.contains(Ipv4Addr::new(10, 0, 11, 0)));
        assert!(!block.contains(Ipv4Addr::new(10, 0, 9, 255)));
    }

    #[test]
    fn test_cidr_cmp() {
        let wide = CidrBlock::parse("10.0.0.0/8").unwrap();
        let mid = CidrBlock::parse("10.0.10.0/24").unwrap();
        let narrow = CidrBlock::parse("10.0.10.64/26").unwrap();

        assert!(wide < mid);
        assert!(mid < narrow);
        assert!(wide.range().start < mid.range().start);
        assert!(wide.broadcast() > narrow.broadcast());
        assert_eq!(wide.broadcast(), Ipv4Addr::new(10, 255, 255, 255));
    }

    #[test]
    fn test_serde_as_string() {
        let block = CidrBlock::parse("10.0.0.9/24").unwrap();
        assert_eq!(serde_json::to_string(&block).unwrap(), "\"10.0.0.0/24\"");

        let blocks: Vec<CidrBlock> =
            serde_json::from_str(r#"["10.0.0.0/16", "172.16.5.0/12"]"#).unwrap();
        assert_eq!(blocks[1].to_string(), "172.16.0.0/12");

        let err = serde_json::from_str::<CidrBlock>("\"10.0.0.0/40\"").unwrap_err();
        assert!(err.to_string().contains("Invalid CIDR block"));
    }
}
