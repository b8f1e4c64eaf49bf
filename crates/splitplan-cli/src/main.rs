//! splitplan CLI entry point: argument parsing, logging setup and command dispatch.

use clap::Parser;
use miette::Result;
use splitplan_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let log_level = if args.verbose || args.quiet {
        None
    } else {
        commands::configured_log_level(&args.command)
    };
    let filter = logger::build_filter(args.verbose, args.quiet, log_level.as_deref());
    logger::init_logger_with_filter(filter, args.no_color);
    ui::init_colors(args.no_color);

    let mut stdout = std::io::stdout().lock();
    splitplan_cli::run(args.command, &mut stdout).map_err(error::cli_error_to_miette)
}
