//! Panel reply parsing
//!
//! Extracts the structured answer list from a panel model's reply. This is
//! pure domain logic - no I/O, no session management, just a strict decode
//! with an explicit fallback.
//!
//! Panel models are instructed to reply with a JSON object holding a
//! `correct_answers` array of option identifiers. Models drift: they wrap
//! JSON in markdown fences, emit prose around it, or return the wrong
//! shape entirely. Anything that does not decode to the expected shape is
//! treated as an abstention (`None`), never as a parse error that escapes
//! this boundary.

/// Field the panel models are instructed to populate
pub const ANSWER_FIELD: &str = "correct_answers";

/// Parse a panel reply into its answer list
///
/// # Returns
///
/// - `Some(answers)` when the reply contains a JSON object with a
///   `correct_answers` array of strings. An empty array is a valid
///   response carrying zero votes.
/// - `None` for any other shape: no JSON object, parse failure, missing
///   field, non-array field, or non-string array elements.
///
/// # Examples
///
/// ```
/// use quizpanel_domain::tally::parsing::parse_answer_list;
///
/// assert_eq!(
///     parse_answer_list(r#"{"correct_answers": ["A", "C"]}"#),
///     Some(vec!["A".to_string(), "C".to_string()])
/// );
/// assert_eq!(parse_answer_list(r#"{"correct_answers": []}"#), Some(vec![]));
/// assert_eq!(parse_answer_list("The answer is A"), None);
/// ```
pub fn parse_answer_list(response: &str) -> Option<Vec<String>> {
    // Tolerate prose or markdown fences around the object
    let start = response.find('{')?;
    let end = response[start..].rfind('}')?;
    let json_str = &response[start..start + end + 1];

    let parsed: serde_json::Value = serde_json::from_str(json_str).ok()?;
    let answers = parsed.get(ANSWER_FIELD)?.as_array()?;

    answers
        .iter()
        .map(|v| v.as_str().map(|s| s.trim().to_string()))
        .collect()
}
