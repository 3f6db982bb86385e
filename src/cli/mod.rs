//! Terminal front-end: shell loop, command dispatch, and view rendering.

pub mod commands;
pub mod output;
pub mod shell;
pub mod views;

pub use commands::{CliMode, CommandError, ShellContext};
pub use shell::{run_cli, CliError, SCRIPT_MODE_ENV};
