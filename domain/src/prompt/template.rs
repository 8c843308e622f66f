//! Prompt templates for the question pipeline

use crate::core::extracted_text::ExtractedText;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the multimodal extraction call
    pub fn extraction_system() -> &'static str {
        r#"You are an expert at extracting text from images. Extract all text from the provided image, including the question and multiple-choice options, and return it as a single string.
Ensure the output is clear and preserves the structure (e.g., question followed by options)."#
    }

    /// User prompt accompanying the image reference
    pub fn extraction_user() -> &'static str {
        "Extract all text from the image."
    }

    /// System prompt for panel models answering the question
    pub fn answer_system() -> &'static str {
        r#"You are an expert at answering multiple-choice questions. Given the question and options, provide the correct answer(s) in JSON format.
If multiple answers are correct, include all correct options in a list.
Ensure the output is a valid JSON object with a 'correct_answers' key containing a list of option identifiers (e.g., ['A', 'B']).
If no answer is correct or the question is unclear, return an empty list."#
    }

    /// User prompt embedding the extracted question text
    pub fn answer_user(extracted: &ExtractedText) -> String {
        format!(
            "Question and options:\n{}\n\nProvide the correct answer(s) in JSON format.",
            extracted.content()
        )
    }
}
