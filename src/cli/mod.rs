//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod init;
pub mod resolve;

pub use args::{BuildArgs, Cli, Commands};
