//! Pure operations over CIDR blocks and identifiers.
//!
//! - [`contains`] - Address containment
//! - [`hosts`] - Usable host counting
//! - [`overlap`] - Overlap detection over a list of blocks
//! - [`sanitize`] - Tag / label sanitization
//! - [`tags`] - Standard tag and label sets

mod contains;
mod hosts;
mod overlap;
mod sanitize;
mod tags;

// Re-export public functions
pub use contains::cidr_contains;
pub use hosts::count_hosts;
pub use overlap::{any_overlap, overlapping_pairs};
pub use sanitize::{sanitize_key, sanitize_map, sanitize_value};
pub use tags::{
    build_aws_tags, build_kube_labels, TAG_ENVIRONMENT, TAG_LOCAL, TAG_MODULE, TAG_REGION,
    TAG_ROOT_MODULE, TAG_STACK_COMMIT, TAG_STACK_VERSION,
};
