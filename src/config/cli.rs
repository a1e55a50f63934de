use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        Path::new(&self.base_path).join(name)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.resolve(name))?;
        Ok(data)
    }

    // 就地覆寫；不建立目錄，目標檔案本來就必須存在
    fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        fs::write(self.resolve(name), data)?;
        Ok(())
    }
}
