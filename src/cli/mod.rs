//! Command-line interfaces.
//!
//! This module provides two front ends:
//!
//! - [`args`] and [`commands`] - the `runsheet` binary, which loads
//!   procedures from YAML definition files
//! - [`embedded`] - a ready-made interface for programs that build their
//!   procedure in Rust and ship it as their own executable

pub mod args;
pub mod commands;
pub mod embedded;

pub use args::{CheckArgs, Cli, Commands, RenderArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandIo, CommandResult};
pub use embedded::{handle_args, DefaultCli};
