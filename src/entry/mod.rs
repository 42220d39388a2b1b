//! Listing data structures.
//!
//! ## Main Parts
//!
//! - [`RawEntry`] - A directory child as reported by the filesystem, before sizing
//! - [`Entry`] - A sized file or directory
//! - [`RenderedLine`] - One line of plain output text plus its style tag
//! - [`Listing`] - The complete result of one listing run

#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for entry types
pub mod entry;
pub mod listing;

pub use entry::{Entry, RawEntry};
pub use listing::{Listing, RenderedLine};
