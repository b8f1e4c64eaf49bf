use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::OutputFormat;

/// Available splitplan subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the shareable entry list
    ///
    /// Lists every declared entry that is not excluded from common-chunk
    /// extraction, in declaration order, joined by the configured separator.
    Shareable(ShareableArgs),

    /// Validate configuration
    ///
    /// Checks entries, exclusions, cache groups and module rules. With --fs,
    /// also checks that every entry source exists on disk.
    Check(CheckArgs),

    /// Plan shared chunks for a chunk manifest
    ///
    /// Applies the configured cache groups to the chunks and modules reported
    /// by a bundler and prints which modules move into which shared chunk.
    Plan(PlanArgs),

    /// Print the build plan as JSON
    Emit(EmitArgs),
}

/// Where to find the configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Config file (splitplan.toml, *.json, or package.json)
    ///
    /// Defaults to discovering splitplan.toml or a `splitplan` field in
    /// package.json inside the project root.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Profile to merge over the base configuration
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,
}

/// Arguments for the shareable command
#[derive(Args, Debug)]
pub struct ShareableArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print a JSON array instead of a joined list
    #[arg(long)]
    pub json: bool,

    /// Separator for the joined list; overrides `settings.separator`
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<String>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Also check that entry sources exist on disk
    #[arg(long)]
    pub fs: bool,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Chunk manifest JSON produced by the bundler
    #[arg(short, long, value_name = "FILE")]
    pub graph: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the emit command
#[derive(Args, Debug)]
pub struct EmitArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Build mode; anything other than `production` means development
    #[arg(short, long, env = "NODE_ENV", value_name = "MODE")]
    pub mode: Option<String>,
}
