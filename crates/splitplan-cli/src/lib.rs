//! splitplan CLI - shareable entry lists, split plans and build plans.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`error`] - `CliError` and the miette conversion used by the binary
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - Status lines on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use splitplan_cli::{commands, cli::{ConfigArgs, ShareableArgs}};
//!
//! let args = ShareableArgs {
//!     config: ConfigArgs { root: ".".into(), ..Default::default() },
//!     json: false,
//!     separator: None,
//! };
//! commands::shareable_execute(args, &mut std::io::stdout()).unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};

use std::io::Write;

/// Dispatch a parsed command, writing its result to `out`.
pub fn run(command: cli::Command, out: &mut impl Write) -> Result<()> {
    match command {
        cli::Command::Shareable(args) => commands::shareable_execute(args, out),
        cli::Command::Check(args) => commands::check_execute(args, out),
        cli::Command::Plan(args) => commands::plan_execute(args, out),
        cli::Command::Emit(args) => commands::emit_execute(args, out),
    }
}
