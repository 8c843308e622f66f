//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{
    FileBatchConfig, FileCatalogConfig, FileConfig, FileGroqConfig, FileModelsConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
