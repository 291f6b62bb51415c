//! gssh-cli: GlobalSSH management commands
//!
//! Command definitions, the dispatcher that turns them into API calls,
//! configuration loading and logging setup for the `gssh` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::CommandError;
