//! Command implementations for the splitplan CLI.
//!
//! - [`shareable`] - Print the shareable entry list
//! - [`check`] - Configuration validation
//! - [`plan`] - Split planning over a chunk manifest
//! - [`emit`] - Build plan output
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and writes its result to the given writer.

pub mod check;
pub mod emit;
pub mod plan;
pub mod shareable;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use emit::execute as emit_execute;
pub use plan::execute as plan_execute;
pub use shareable::execute as shareable_execute;
pub use utils::configured_log_level;
