//! Command conversion pipeline
//!
//! Turns a structured intent into a shell command:
//! JSON payload -> ParsedIntent -> catalog lookup -> template -> render (with
//! per-parameter normalization) -> command string

pub mod catalog;
pub mod converter;
pub mod intent;
pub mod normalize;
pub mod render;

pub use catalog::OperationsCatalog;
pub use converter::CommandConverter;
pub use intent::ParsedIntent;
pub use normalize::ParamNormalizer;
