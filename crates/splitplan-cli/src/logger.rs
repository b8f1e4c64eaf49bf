//! Logging setup for the splitplan CLI.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: debug for all splitplan crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. `settings.log_level` from the configuration, if the caller passes one
//! 5. info for all splitplan crates
//!
//! Logs go to stderr so command output on stdout stays pipeable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "splitplan=debug,splitplan_config=debug,splitplan_cli=debug";
const QUIET_FILTER: &str = "splitplan=error,splitplan_config=error,splitplan_cli=error";
const DEFAULT_FILTER: &str = "splitplan=info,splitplan_config=info,splitplan_cli=info";

/// Build the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool, fallback: Option<&str>) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            fallback
                .and_then(|level| EnvFilter::try_new(level).ok())
                .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
        })
    }
}

/// Initialize the tracing subscriber with an explicit filter.
///
/// Call once, before any logging. Later calls are ignored.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Whether colored output should be enabled.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise the terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
