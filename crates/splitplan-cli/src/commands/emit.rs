//! Emit command implementation.

use std::io::Write;

use splitplan::build_plan::NODE_ENV_KEY;
use splitplan::BuildPlan;
use splitplan_config::{validate_schema, BuildMode};

use crate::cli::EmitArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print the build plan as pretty JSON.
///
/// `--mode` (or `NODE_ENV`) replaces the configured mode, and its raw value is
/// defined as `process.env.NODE_ENV` unless the config defines that key.
pub fn execute(args: EmitArgs, out: &mut impl Write) -> Result<()> {
    let mut config = utils::load_config(&args.config)?;
    validate_schema(&config.bundle)?;

    if let Some(mode) = args.mode.as_deref() {
        config.bundle.mode = BuildMode::from_node_env(mode);
        config
            .bundle
            .define
            .entry(NODE_ENV_KEY.to_string())
            .or_insert_with(|| serde_json::Value::from(mode).to_string());
        tracing::debug!(mode = %config.bundle.mode, "build mode from command line");
    }

    let plan = BuildPlan::from_project(&config);
    writeln!(out, "{}", plan.to_json_pretty()?)?;
    Ok(())
}
