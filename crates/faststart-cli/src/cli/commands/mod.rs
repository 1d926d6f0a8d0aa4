//! CLI command handlers. Each command is in its own file.

mod locate;
mod predict;
mod process;
mod suffix;

pub use locate::run_locate;
pub use predict::run_predict;
pub use process::run_process;
pub use suffix::run_suffix;
