//! Completion Gateway port
//!
//! Defines the interface for communicating with hosted model-inference
//! endpoints. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use quizpanel_domain::{ExtractedText, ImageLocator, Model, PromptTemplate};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,
}

/// One completion request to a hosted model
///
/// Carries everything a chat-completions endpoint needs: the model, a
/// system instruction, user content (text, optionally with an image
/// reference), sampling temperature, an output-length cap, and whether to
/// force structured JSON decoding.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: Model,
    pub system: String,
    pub user: String,
    pub image_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub json_mode: bool,
}

impl CompletionRequest {
    /// Request transcribing one question image
    ///
    /// Low randomness so repeated extractions of the same image stay
    /// close to deterministic.
    pub fn extraction(model: Model, locator: &ImageLocator) -> Self {
        Self {
            model,
            system: PromptTemplate::extraction_system().to_string(),
            user: PromptTemplate::extraction_user().to_string(),
            image_url: Some(locator.as_str().to_string()),
            temperature: 0.3,
            max_tokens: 2048,
            json_mode: false,
        }
    }

    /// Request asking one panel model to answer the extracted question
    pub fn answer(model: Model, extracted: &ExtractedText) -> Self {
        Self {
            model,
            system: PromptTemplate::answer_system().to_string(),
            user: PromptTemplate::answer_user(extracted),
            image_url: None,
            temperature: 0.5,
            max_tokens: 1024,
            json_mode: true,
        }
    }
}

/// Gateway for model-inference calls
///
/// One method covers both the multimodal extraction call and the text
/// panel calls; the request says whether an image reference rides along.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Issue one completion request and return the model's text output
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_request_carries_image() {
        let locator = ImageLocator::new("https://example.com/w1q1.PNG");
        let request = CompletionRequest::extraction(Model::default_extraction(), &locator);

        assert_eq!(request.image_url.as_deref(), Some("https://example.com/w1q1.PNG"));
        assert!(!request.json_mode);
        assert_eq!(request.max_tokens, 2048);
    }

    #[test]
    fn test_answer_request_forces_json() {
        let extracted = ExtractedText::new("Q1...");
        let request = CompletionRequest::answer(Model::Qwen3, &extracted);

        assert!(request.json_mode);
        assert!(request.image_url.is_none());
        assert!(request.user.contains("Q1..."));
    }
}
