//! CLI command handlers, one per file.

mod check;
mod registry;
mod watch;

pub use check::run_check;
pub use registry::run_registry;
pub use watch::run_watch;
