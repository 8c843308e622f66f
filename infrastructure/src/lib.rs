//! Infrastructure layer for quizpanel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod providers;

// Re-export commonly used types
pub use catalog::CatalogLoader;
pub use config::{ConfigLoader, FileConfig};
pub use providers::groq::GroqGateway;
