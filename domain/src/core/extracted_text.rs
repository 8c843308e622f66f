//! Extracted text value object

use serde::{Deserialize, Serialize};

/// Transcription of one question image (Value Object)
///
/// Produced once per question by the multimodal extraction model. The text
/// is opaque to the rest of the pipeline: downstream panel models consume
/// it verbatim as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Create extracted text
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.trim().is_empty(), "Extracted text cannot be empty");
        Self(text)
    }

    /// Try to create extracted text, returning None if empty
    pub fn try_new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    /// Get the transcription content
    pub fn content(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_text_creation() {
        let text = ExtractedText::new("Q1. What is cloud computing?\nA) ...\nB) ...");
        assert!(text.content().starts_with("Q1."));
    }

    #[test]
    fn test_try_new_empty() {
        assert!(ExtractedText::try_new("").is_none());
        assert!(ExtractedText::try_new("\n  \t").is_none());
        assert!(ExtractedText::try_new("Question text").is_some());
    }
}
