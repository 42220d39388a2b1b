//! # psize
//!
//! List the files and directories directly under a path, sorted by size, with a
//! human-readable size column and a proportional bar scaled to the terminal.
//!
//! The crate is split into a pure sizing-and-rendering pipeline and a few thin
//! collaborators at its edges:
//!
//! - [`fs`]: the filesystem abstraction ([`fs::FileSystem`]) and its OS implementation
//! - [`sizer`]: recursive directory sizing, sequential or parallel, with cancellation
//! - [`sorting`]: the deterministic (size, name) ordering
//! - [`bar`]: proportional bar rendering
//! - [`lister`]: the Enumerate → Size → Sort → Truncate → Render → Emit pipeline
//! - [`output`]: colors and JSON, applied only at the output boundary
//! - [`terminal`]: terminal width detection

pub mod bar;
pub mod config;
pub mod entry;
pub mod error;
pub mod fs;
pub mod lister;
pub mod output;
pub mod sizer;
pub mod sorting;
pub mod terminal;
pub mod utils;

pub use config::{DisplayConfig, ScanOptions};
pub use entry::{Entry, Listing, RenderedLine};
pub use error::{ListError, SizeError};
pub use lister::Lister;
