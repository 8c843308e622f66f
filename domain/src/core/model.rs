//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// This is a domain concept representing the hosted models that can take
/// part in answering a quiz question, either as the multimodal extraction
/// model or as a member of the text panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Multimodal (text extraction)
    Llama4Maverick,
    // Text panel
    Qwen3,
    Llama3,
    DeepseekR1,
    Gemma2,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama4Maverick => "meta-llama/llama-4-maverick-17b-128e-instruct",
            Model::Qwen3 => "qwen/qwen3-32b",
            Model::Llama3 => "llama3-70b-8192",
            Model::DeepseekR1 => "deepseek-r1-distill-llama-70b",
            Model::Gemma2 => "gemma2-9b-it",
            Model::Custom(s) => s,
        }
    }

    /// Default panel of text models for answering questions
    pub fn default_panel() -> Vec<Model> {
        vec![
            Model::Qwen3,
            Model::Llama3,
            Model::DeepseekR1,
            Model::Gemma2,
        ]
    }

    /// Default multimodal model for text extraction
    pub fn default_extraction() -> Model {
        Model::Llama4Maverick
    }

    /// Check if this model accepts image content
    pub fn is_multimodal(&self) -> bool {
        matches!(self, Model::Llama4Maverick)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "meta-llama/llama-4-maverick-17b-128e-instruct" => Model::Llama4Maverick,
            "qwen/qwen3-32b" => Model::Qwen3,
            "llama3-70b-8192" => Model::Llama3,
            "deepseek-r1-distill-llama-70b" => Model::DeepseekR1,
            "gemma2-9b-it" => Model::Gemma2,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().expect("Model parsing is infallible"))
    }
}
