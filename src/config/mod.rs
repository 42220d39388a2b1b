//! Configuration for a single listing run.
//!
//! Both option structs are built once per invocation from their defaults,
//! overridden by command-line arguments, and then passed by reference through
//! the pipeline. Nothing here is global or mutable after construction.

pub mod display;
pub mod scan;

pub use display::DisplayConfig;
pub use scan::ScanOptions;
