pub mod command;
pub mod engine;
pub mod repl;

pub use crate::domain::model::{BinaryString, Command, Operation};
pub use crate::domain::ports::{ConfigProvider, LineSource};
pub use crate::utils::error::Result;
