//! Resolve Batch use case
//!
//! Fans the question pipeline out across all questions of one course week.

use crate::use_cases::resolve_question::ResolveQuestionUseCase;
use quizpanel_domain::{LocatorTemplate, QuestionResult};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Number of questions per week in the reference deployment
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Input for the ResolveBatch use case
#[derive(Debug, Clone)]
pub struct ResolveBatchInput {
    pub course_id: String,
    pub week: u32,
}

impl ResolveBatchInput {
    pub fn new(course_id: impl Into<String>, week: u32) -> Self {
        Self {
            course_id: course_id.into(),
            week,
        }
    }
}

/// Use case for answering a whole week's quiz
///
/// Each question's pipeline is independent and failure-isolated: one
/// question failing is recorded in its [`QuestionResult`] and never aborts
/// the batch. Questions run concurrently; the output is always ordered by
/// question number ascending regardless of completion order.
pub struct ResolveBatchUseCase {
    resolver: Arc<ResolveQuestionUseCase>,
    template: LocatorTemplate,
    question_count: u32,
}

impl ResolveBatchUseCase {
    pub fn new(
        resolver: Arc<ResolveQuestionUseCase>,
        template: LocatorTemplate,
        question_count: u32,
    ) -> Self {
        Self {
            resolver,
            template,
            question_count,
        }
    }

    /// Resolve questions 1..=question_count for one course week
    pub async fn resolve_batch(&self, input: ResolveBatchInput) -> Vec<QuestionResult> {
        info!(
            course_id = %input.course_id,
            week = input.week,
            questions = self.question_count,
            "Resolving batch"
        );

        let mut join_set = JoinSet::new();

        for question_num in 1..=self.question_count {
            let resolver = Arc::clone(&self.resolver);
            let locator = self
                .template
                .render(&input.course_id, input.week, question_num);

            join_set.spawn(async move {
                match resolver.resolve(&locator).await {
                    Ok(answers) => {
                        info!(question_num, ?answers, "Question resolved");
                        QuestionResult::success(question_num, locator, answers)
                    }
                    Err(e) => {
                        warn!(question_num, error = %e, "Question failed");
                        QuestionResult::failure(question_num, locator, e.to_string())
                    }
                }
            });
        }

        let mut results = Vec::with_capacity(self.question_count as usize);
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => warn!("Task join error: {}", e),
            }
        }

        // Completion order is arbitrary under concurrency
        results.sort_by_key(|r| r.question_num);
        results
    }
}
