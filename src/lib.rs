pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{CsvFileSink, RandomSkip};
pub use config::{toml_config::TomlConfig, ConfigLayer, ScanConfig};
pub use core::simulator::ScanSimulator;
pub use utils::error::{Result, ScanError};
