pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::ReaderSource;
pub use config::Settings;
pub use crate::core::repl::{LoopState, Repl};
pub use domain::model::{BinaryString, Command, Operation};
pub use utils::error::{CalcError, Result};
