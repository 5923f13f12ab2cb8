// ---------------------------------------------------------------------------
// Scan orchestration
// ---------------------------------------------------------------------------
//
// Builds shell command lines for the external scanning tools, runs them
// through a pluggable executor, and shapes their output into the labeled
// text blocks shown to the user and written to the result store.

pub mod adapters;
pub mod engine;
pub mod exec;
pub mod sanitize;

pub use engine::{ScanEngine, ScanReport};
pub use exec::{CommandExecutor, ExecError, ShellExecutor};
pub use sanitize::sanitize;
