//! IPv4 CIDR analysis and tag / label sanitization.
//!
//! Two independent sets of pure functions:
//! - CIDR analyzer: [`parse_cidr`], [`cidr_contains`], [`count_hosts`], [`any_overlap`]
//! - Identifier sanitizer: [`sanitize_value`], [`sanitize_key`], [`sanitize_map`]
//!   for the AWS tag and Kubernetes label [`Dialect`]s
//!
//! [`build_aws_tags`] and [`build_kube_labels`] assemble the standard tag sets
//! from a [`ProviderConfig`].

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::ProviderConfig;
pub use error::{CidrError, ConfigError};
pub use models::{parse_cidr, parse_cidrs, CidrBlock, Dialect, OptionalValue};
pub use processing::{
    any_overlap, build_aws_tags, build_kube_labels, cidr_contains, count_hosts,
    overlapping_pairs, sanitize_key, sanitize_map, sanitize_value,
};
