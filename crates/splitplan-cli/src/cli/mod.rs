//! Command-line interface definition for splitplan.
//!
//! # Command Structure
//!
//! - `splitplan shareable` - Print the entries eligible for common-chunk extraction
//! - `splitplan check` - Validate the configuration
//! - `splitplan plan` - Run the cache groups over a chunk manifest
//! - `splitplan emit` - Print the build plan as JSON

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, EmitArgs, PlanArgs, ShareableArgs};
pub use enums::*;

/// splitplan - shared-chunk planning for multi-entry bundles
#[derive(Parser, Debug)]
#[command(
    name = "splitplan",
    version,
    about = "Shared-chunk planning for multi-entry bundles",
    long_about = "splitplan decides which entry points of a multi-entry bundle may share\n\
                  a common vendor chunk, runs the configured cache groups over a chunk\n\
                  manifest, and emits a declarative build plan for the bundler pipeline."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
