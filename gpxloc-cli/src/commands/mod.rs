//! CLI command implementations.
//!
//! - [`search`] - Find track files passing through a region
pub mod search;
