//! Command-line interface.
//!
//! Argument definitions live in [`args`], execution in [`commands`].

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, LintArgs};
pub use commands::{dispatch, CommandResult};
