use crate::domain::model::CleanResult;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn styles_dir(&self) -> &str;
    fn stylesheet_name(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<u8>>;
    fn transform(&self, data: Vec<u8>) -> Result<CleanResult>;
    fn load(&self, result: CleanResult) -> Result<String>;
}
