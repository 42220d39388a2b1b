//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library. Helper methods on [`Cli`] turn the
//! parsed arguments into the library's [`DisplayConfig`] and [`ScanOptions`],
//! starting from their defaults and overriding only what was passed.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use psize::config::display::{DEFAULT_BAR_GLYPH, DEFAULT_DISPLAY_COUNT, DEFAULT_ROOT_PATH};
use psize::config::{DisplayConfig, ScanOptions};
use psize::utils::normalize_root;

/// Command-line arguments for controlling directory sizing.
#[derive(Parser)]
struct SizingArgs {
    /// Show the recursive size of directories (takes longer to run)
    ///
    /// Without this flag a directory is listed with the size of its own
    /// metadata entry, not of its contents.
    #[arg(short = 'd', long)]
    dirsize: bool,

    /// Size directories one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// The number of threads to use for directory sizing
    ///
    /// A value of 0 uses the default number of threads (typically the number of CPU cores).
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Give up sizing directories after this many seconds
    ///
    /// Useful on slow or hung network mounts. When the limit is hit the whole
    /// listing fails with a timeout error.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

/// Command-line arguments for controlling how the listing is displayed.
#[derive(Parser)]
struct DisplayArgs {
    /// Show files in ascending order (smallest first)
    #[arg(short = 'r', long)]
    reverse: bool,

    /// Number of entries to show
    ///
    /// The total size always covers every entry, including the hidden ones.
    #[arg(short = 'c', long, default_value_t = DEFAULT_DISPLAY_COUNT)]
    count: usize,

    /// Character used to draw the size bars
    #[arg(long, value_name = "GLYPH", default_value = DEFAULT_BAR_GLYPH, value_parser = parse_glyph)]
    bar: String,

    /// Disable colored output
    ///
    /// Colors are also disabled automatically when stdout is not a terminal.
    #[arg(long)]
    no_color: bool,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "psize")]
#[command(about = "List files and directories sorted by size, with proportional bars")]
#[command(version, disable_version_flag = true)]
#[command(author)]
pub struct Cli {
    /// Directory to list
    ///
    /// Defaults to the current directory. A leading `~` is expanded to the
    /// home directory.
    #[arg(default_value = DEFAULT_ROOT_PATH)]
    path: String,

    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, colors and the progress spinner are suppressed and a
    /// single JSON document is printed to stdout.
    #[arg(long)]
    json: bool,

    /// Log sizing details and skipped directories to stderr
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(long)]
    verbose: bool,

    /// Sizing options
    #[command(flatten)]
    sizing: SizingArgs,

    /// Display options
    #[command(flatten)]
    display: DisplayArgs,
}

/// Accept exactly one character as the bar glyph.
fn parse_glyph(value: &str) -> Result<String, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => Ok(value.to_string()),
        _ => Err(format!("expected a single character, got {value:?}")),
    }
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Whether `--verbose` logging is enabled.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether lines should be colored, given whether stdout is a terminal.
    #[must_use]
    pub const fn color(&self, stdout_is_terminal: bool) -> bool {
        stdout_is_terminal && !self.display.no_color && !self.json
    }

    /// The directory to list, normalized.
    #[must_use]
    pub fn root_path(&self) -> PathBuf {
        normalize_root(&self.path)
    }

    /// Build the display configuration for a terminal of `terminal_width` columns.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use clap::Parser;
    /// # mod cli { include!("cli.rs"); }
    /// # use cli::Cli;
    /// let args = Cli::parse_from(&["psize", "--dirsize", "--count", "3"]);
    /// let config = args.display_config(100);
    /// assert!(config.compute_directory_sizes);
    /// assert_eq!(config.display_count, 3);
    /// ```
    #[must_use]
    pub fn display_config(&self, terminal_width: usize) -> DisplayConfig {
        DisplayConfig {
            bar_glyph: self.display.bar.clone(),
            compute_directory_sizes: self.sizing.dirsize,
            root_path: self.root_path(),
            ascending: self.display.reverse,
            display_count: self.display.count,
            terminal_width,
        }
    }

    /// Build the sizing options.
    ///
    /// - **parallel**: on unless `--sequential`
    /// - **threads**: CLI > `0` (rayon default)
    /// - **timeout**: CLI seconds > none
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        let defaults = ScanOptions::default();

        ScanOptions {
            parallel: defaults.parallel && !self.sizing.sequential,
            threads: self.sizing.threads.unwrap_or(defaults.threads),
            timeout: self
                .sizing
                .timeout
                .map(Duration::from_secs)
                .or(defaults.timeout),
        }
    }
}
