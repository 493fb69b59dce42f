//! Terminal front end for perfect_tictactoe.
//!
//! - **cli**: argument parsing
//! - **config**: TOML settings
//! - **repl**: the interactive game loop
//! - **render**: session events as text
//! - **analysis**: single-position reports

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod render;
pub mod repl;

pub use analysis::{Analysis, analyze};
pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use render::TextSink;
pub use repl::{Input, run};
