//! Utility functions and helpers.
//!
//! This module contains the small pure formatting helpers used when rendering
//! a listing (byte-count formatting, name shortening) and root-path
//! normalization for the command line.

pub mod name;
pub mod path;
pub mod size;

pub use name::shorten_name;
pub use path::{expand_tilde, normalize_root};
pub use size::format_size;
