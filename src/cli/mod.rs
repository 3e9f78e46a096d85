// src/cli/mod.rs
//! Command-line surface: argument parsing, one-shot queries and the game loop.

pub mod args;
pub mod command;
pub mod handlers;
pub mod repl;

pub use args::{Cli, Commands};
