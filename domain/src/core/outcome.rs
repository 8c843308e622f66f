//! Per-question batch outcome

use super::locator::ImageLocator;
use serde::{Deserialize, Serialize};

/// Outcome of resolving one question within a batch
///
/// A failed question is recorded as `success: false` with an error message
/// and an empty answer list; it never aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    /// Question number within the week (1-indexed)
    pub question_num: u32,
    /// Whether the pipeline produced an answer set for this question
    pub success: bool,
    /// Locator of the question image
    pub image_url: ImageLocator,
    /// Winning answer options, sorted; empty when the question failed
    pub answers: Vec<String>,
    /// Failure message, present only when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuestionResult {
    /// Record a successfully answered question
    pub fn success(question_num: u32, image_url: ImageLocator, answers: Vec<String>) -> Self {
        Self {
            question_num,
            success: true,
            image_url,
            answers,
            error: None,
        }
    }

    /// Record a failed question
    pub fn failure(question_num: u32, image_url: ImageLocator, error: impl Into<String>) -> Self {
        Self {
            question_num,
            success: false,
            image_url,
            answers: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> ImageLocator {
        ImageLocator::new("https://example.com/w1q1.PNG")
    }

    #[test]
    fn test_success_has_no_error() {
        let result = QuestionResult::success(1, locator(), vec!["A".to_string()]);
        assert!(result.success);
        assert!(result.error.is_none());
        assert_eq!(result.answers, vec!["A"]);
    }

    #[test]
    fn test_failure_has_empty_answers() {
        let result = QuestionResult::failure(3, locator(), "extraction failed");
        assert!(!result.success);
        assert!(result.answers.is_empty());
        assert_eq!(result.error.as_deref(), Some("extraction failed"));
    }

    #[test]
    fn test_error_omitted_from_json_on_success() {
        let result = QuestionResult::success(2, locator(), vec![]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("\"error\""));
        assert!(json.contains("\"question_num\":2"));
    }
}
