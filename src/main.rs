//! # psize
//!
//! List the files and directories under a path sorted by size, each with a
//! human-readable size and a bar proportional to its share of the total.
//!
//! ## Usage
//!
//! ```bash
//! # Largest 10 entries in the current directory
//! psize
//!
//! # Include the recursive size of directories
//! psize --dirsize ~/Downloads
//!
//! # Smallest 25 entries, as JSON
//! psize --reverse --count 25 --json
//! ```

mod cli;

use std::io::{self, IsTerminal, Write};
use std::process::exit;

use anyhow::{Ok, Result};
use clap::Parser;
use cli::Cli;
use psize::{Lister, fs::OsFileSystem, output::JsonOutput, terminal::terminal_width};
use tracing_subscriber::{EnvFilter, fmt};

/// Entry point for the psize application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, lists the directory, and writes the result to stdout in
/// one go, either as colored text or as JSON.
///
/// # Errors
///
/// Returns errors from thread-pool configuration, directory enumeration,
/// sizing timeouts, JSON serialization, or writing to stdout.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose());

    let scan_options = args.scan_options();
    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    let config = args.display_config(terminal_width());
    let listing = Lister::new(OsFileSystem, scan_options)
        .with_quiet(args.json())
        .list(&config)?;

    let stdout = io::stdout();
    let color = args.color(stdout.is_terminal());
    let mut stdout = stdout.lock();

    if args.json() {
        let output = JsonOutput::from_listing(&config.root_path, &listing);
        writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        listing.write_to(&mut stdout, color)?;
    }

    Ok(())
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output from this crate with `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "psize=debug,warn" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Only the first subscriber is installed; later calls are no-ops
    fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
