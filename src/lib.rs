pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{engine::CleanEngine, pipeline::CleanPipeline};
pub use crate::utils::error::{CleanError, Result};
