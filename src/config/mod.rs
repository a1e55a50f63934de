pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "css-clean")]
#[command(about = "One-shot cleaner for a null-byte damaged stylesheet")]
pub struct CliConfig {
    /// Directory that holds the stylesheet
    #[arg(long, default_value = "./src/styles")]
    pub styles_dir: String,

    /// Stylesheet file name inside the styles directory
    #[arg(long, default_value = "global.css")]
    pub stylesheet: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,

    #[arg(long, help = "Analyze the stylesheet without writing changes")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn styles_dir(&self) -> &str {
        &self.styles_dir
    }

    fn stylesheet_name(&self) -> &str {
        &self.stylesheet
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("styles_dir", &self.styles_dir)?;
        validation::validate_path("stylesheet", &self.stylesheet)?;
        validation::validate_file_extension("stylesheet", &self.stylesheet, &["css"])?;
        Ok(())
    }
}
