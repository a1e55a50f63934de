pub mod cleaner;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{CleanResult, TrailingMarker, Truncation};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
