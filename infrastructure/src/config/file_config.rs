//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use quizpanel_application::DEFAULT_QUESTION_COUNT;
use quizpanel_domain::{LocatorTemplate, Model};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Groq API settings
    pub groq: FileGroqConfig,
    /// Model selection
    pub models: FileModelsConfig,
    /// Batch settings
    pub batch: FileBatchConfig,
    /// Course catalog settings
    pub catalog: FileCatalogConfig,
}

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl FileServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[groq]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroqConfig {
    /// API key; the GROQ_API_KEY environment variable takes precedence
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FileGroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: crate::providers::groq::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileGroqConfig {
    /// Resolve the API key: environment first, then the config file
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[models]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Multimodal model used for text extraction
    pub extraction: Model,
    /// Text models forming the answer panel
    pub panel: Vec<Model>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            extraction: Model::default_extraction(),
            panel: Model::default_panel(),
        }
    }
}

/// `[batch]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Questions per week
    pub question_count: u32,
    /// Image URL template with {course}, {week} and {question} placeholders
    pub locator_template: LocatorTemplate,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            locator_template: LocatorTemplate::default(),
        }
    }
}

/// `[catalog]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    pub path: PathBuf,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("courses.toml"),
        }
    }
}
