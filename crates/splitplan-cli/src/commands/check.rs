//! Check command implementation.
//!
//! Validates configuration without planning anything.

use std::io::Write;

use splitplan::{RuleSet, ShareableTargets, SplitPlanner};
use splitplan_config::{validate_fs, validate_schema};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the configuration and merge the profile
/// 2. Schema checks: entries, exclusions, cache groups, rule patterns
/// 3. Entry sources on disk (with `--fs`)
/// 4. Compile cache groups and module rules
pub fn execute(args: CheckArgs, out: &mut impl Write) -> Result<()> {
    ui::info("Checking configuration...");

    let config = utils::load_config(&args.config)?;
    let bundle = &config.bundle;

    if args.fs {
        validate_fs(bundle, &args.config.root)?;
        ui::success("Entry sources exist");
    } else {
        validate_schema(bundle)?;
    }

    let planner = SplitPlanner::from_options(bundle)?;
    let rules = RuleSet::compile(&bundle.rules)?;

    let shareable = ShareableTargets::from_options(bundle);
    for name in &bundle.exclude_from_common {
        if bundle.entry(name).is_none() {
            ui::warning(&format!("Excluded entry '{name}' is not declared and has no effect"));
        }
    }

    writeln!(
        out,
        "{} entries, {} shareable ({}), {} cache groups, {} rules",
        bundle.entries.len(),
        shareable.len(),
        shareable.joined(config.settings.separator()),
        planner.groups().len(),
        rules.len()
    )?;

    ui::success("Configuration is valid!");
    Ok(())
}
