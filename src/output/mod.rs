//! Output formatting for command results.
//!
//! - [`terminal`] - Terminal output with colors

mod terminal;

pub use terminal::{format_bool, format_map, format_overlaps};
