//! Value types shared by the CIDR analyzer and the identifier sanitizer.
//!
//! - [`CidrBlock`] - IPv4 network in CIDR notation
//! - [`AddrRange`] - Inclusive address range derived from a block
//! - [`Dialect`] - Sanitization rules for AWS tags or Kubernetes labels
//! - [`OptionalValue`] - Absent / unknown / present string

mod cidr;
mod dialect;
mod optional;
mod range;

pub use cidr::{netmask_bits, parse_cidr, parse_cidrs, CidrBlock, MAX_PREFIX_LEN};
pub use dialect::Dialect;
pub use optional::OptionalValue;
pub use range::AddrRange;
