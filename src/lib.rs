//! Shellwright - turn structured intents into macOS shell commands

pub mod command;
pub mod core;

pub use crate::command::{CommandConverter, OperationsCatalog, ParamNormalizer, ParsedIntent};
pub use crate::core::{ConvertError, EngineConfig};
