use crate::core::cleaner;
use crate::core::{CleanResult, ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct CleanPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CleanPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CleanPipeline<S, C> {
    fn extract(&self) -> Result<Vec<u8>> {
        tracing::info!("🚀 Reading stylesheet: {}", self.config.stylesheet_name());

        let bytes = self.storage.read_file(self.config.stylesheet_name())?;

        tracing::debug!("Read {} bytes", bytes.len());
        Ok(bytes)
    }

    fn transform(&self, data: Vec<u8>) -> Result<CleanResult> {
        tracing::info!("🔧 Cleaning {} bytes", data.len());

        let result = cleaner::clean(&data);

        if result.nulls_removed > 0 {
            tracing::info!("🧹 Removed {} null bytes", result.nulls_removed);
        }

        match &result.truncation {
            Some(t) => tracing::info!(
                "✂️ Truncated at '{}' (offset {}, {} bytes dropped)",
                t.marker.as_str(),
                t.offset,
                t.bytes_dropped
            ),
            None => tracing::debug!("No trailing garbage marker found"),
        }

        if !result.is_dirty() {
            tracing::info!("✨ Stylesheet was already clean");
        }

        Ok(result)
    }

    fn load(&self, result: CleanResult) -> Result<String> {
        let name = self.config.stylesheet_name();

        tracing::debug!("Writing {} bytes to {}", result.cleaned.len(), name);
        self.storage.write_file(name, &result.cleaned)?;

        let output_path = format!("{}/{}", self.config.styles_dir(), name);

        tracing::debug!("Stylesheet saved successfully");
        Ok(output_path)
    }
}
