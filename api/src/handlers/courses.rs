//! Course listing and search handler

use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use quizpanel_domain::Course;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct CourseQuery {
    /// Substring to match against course id and name
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /api/courses - List all courses, or search with `?q=`
pub async fn get_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Json<Vec<Course>> {
    let q = query.q.as_deref().unwrap_or("");
    let matches: Vec<Course> = state.catalog.search(q).into_iter().cloned().collect();
    debug!(query = q, count = matches.len(), "Course search");
    Json(matches)
}
