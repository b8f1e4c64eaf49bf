//! Shareable command implementation.

use std::io::Write;

use splitplan::ShareableTargets;
use splitplan_config::validate_schema;

use crate::cli::ShareableArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print the shareable entry list.
///
/// Writes either the names joined by the separator or a JSON array, followed
/// by a newline. An empty list prints an empty line (or `[]`).
pub fn execute(args: ShareableArgs, out: &mut impl Write) -> Result<()> {
    let config = utils::load_config(&args.config)?;
    validate_schema(&config.bundle)?;

    let shareable = ShareableTargets::from_options(&config.bundle);
    tracing::debug!(
        shareable = shareable.len(),
        excluded = config.bundle.exclude_from_common.len(),
        "classified entries"
    );

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&shareable)?)?;
    } else {
        let separator = args
            .separator
            .as_deref()
            .unwrap_or_else(|| config.settings.separator());
        writeln!(out, "{}", shareable.joined(separator))?;
    }

    Ok(())
}
