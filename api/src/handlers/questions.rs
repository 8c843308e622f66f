//! Batch question answering handler

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use quizpanel_application::ResolveBatchInput;
use quizpanel_domain::QuestionResult;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default)]
    pub course_id: Option<String>,
    /// Week number; accepted as an integer or a numeric string
    #[serde(default)]
    pub week: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub results: Vec<QuestionResult>,
}

/// POST /api/questions - Answer every question for a course week
///
/// Always responds 200 with per-question success flags once the request
/// validates; a failed question is a flag in its result entry, never an
/// HTTP error.
pub async fn post_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let course_id = match request.course_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(ErrorResponse::bad_request("Course ID and week are required")),
    };

    let week = parse_week(request.week.as_ref())?;

    info!(course_id = %course_id, week, "Processing questions request");

    let results = state
        .batch
        .resolve_batch(ResolveBatchInput::new(course_id, week))
        .await;

    Ok(Json(QuestionsResponse {
        success: true,
        results,
    }))
}

/// Accept `3` or `"3"`; anything else is a validation error
fn parse_week(
    week: Option<&serde_json::Value>,
) -> Result<u32, (StatusCode, Json<ErrorResponse>)> {
    let week = week.ok_or_else(|| ErrorResponse::bad_request("Course ID and week are required"))?;

    let parsed = match week {
        serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    match parsed {
        Some(week) if week >= 1 => Ok(week),
        _ => Err(ErrorResponse::bad_request("Week must be a positive integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_week_number() {
        assert_eq!(parse_week(Some(&serde_json::json!(3))).unwrap(), 3);
    }

    #[test]
    fn test_parse_week_string() {
        assert_eq!(parse_week(Some(&serde_json::json!("4"))).unwrap(), 4);
        assert_eq!(parse_week(Some(&serde_json::json!(" 2 "))).unwrap(), 2);
    }

    #[test]
    fn test_parse_week_rejects_invalid() {
        assert!(parse_week(None).is_err());
        assert!(parse_week(Some(&serde_json::json!("three"))).is_err());
        assert!(parse_week(Some(&serde_json::json!(0))).is_err());
        assert!(parse_week(Some(&serde_json::json!(-1))).is_err());
        assert!(parse_week(Some(&serde_json::json!([2]))).is_err());
    }
}
