//! Plan command implementation.

use std::io::Write;

use splitplan::{ChunkManifest, SkipReason, SplitPlan, SplitPlanner};
use splitplan_config::validate_schema;

use crate::cli::{OutputFormat, PlanArgs};
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Run the configured cache groups over a chunk manifest.
pub fn execute(args: PlanArgs, out: &mut impl Write) -> Result<()> {
    let config = utils::load_config(&args.config)?;
    validate_schema(&config.bundle)?;

    let graph = utils::resolve_path(&args.graph, &std::env::current_dir()?);
    if !graph.is_file() {
        return Err(CliError::FileNotFound(graph));
    }
    let manifest = ChunkManifest::from_path(&graph)?;

    let plan = SplitPlanner::from_options(&config.bundle)?.plan(&manifest)?;
    tracing::info!(
        chunks = plan.chunks.len(),
        skipped = plan.skipped.len(),
        "planned shared chunks"
    );

    match args.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?,
        OutputFormat::Text => write_text(&plan, out)?,
    }

    if plan.is_empty() {
        ui::warning("No modules were moved into shared chunks");
    }
    Ok(())
}

fn write_text(plan: &SplitPlan, out: &mut impl Write) -> Result<()> {
    for chunk in &plan.chunks {
        writeln!(
            out,
            "{} ({}, {} modules) from {}",
            chunk.name,
            ui::format_size(chunk.size),
            chunk.modules.len(),
            chunk.source_chunks.join(", ")
        )?;
        for module in &chunk.modules {
            writeln!(out, "  {module}")?;
        }
    }

    for skipped in &plan.skipped {
        let reason = match &skipped.reason {
            SkipReason::NoMatchingModules => "no matching modules".to_string(),
            SkipReason::BelowMinSize { size, min_size } => format!(
                "{} is below the minimum of {}",
                ui::format_size(*size),
                ui::format_size(*min_size)
            ),
        };
        writeln!(out, "skipped {}: {}", skipped.name, reason)?;
    }

    Ok(())
}
