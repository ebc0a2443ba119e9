//! rg-cli library
//!
//! Argument parsing, wiring and console reporting for the `grant-role` binary,
//! exported so the pieces can be exercised without spawning the process.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod outcome;
pub mod report;

#[cfg(test)]
mod tests;

pub use app::{apply_overrides, connect, execute, run};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use outcome::Outcome;
pub use report::{exit_status, report};
