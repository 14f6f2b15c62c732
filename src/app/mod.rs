//! Application layer: wiring, commands, the interactive shell and the CLI.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod shell;

pub use context::AppContext;
