//! Resolve Question use case
//!
//! Orchestrates the pipeline for a single question image: one extraction
//! call, a panel fan-out, then the tally.

use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use quizpanel_domain::{AnswerTally, ExtractedText, ImageLocator, Model, parse_answer_list};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that are fatal to a single question
#[derive(Error, Debug)]
pub enum ResolveQuestionError {
    #[error("No panel models configured")]
    EmptyPanel,

    #[error("Text extraction failed ({model}): {source}")]
    Extraction {
        model: Model,
        #[source]
        source: GatewayError,
    },

    #[error("no valid responses received from any model")]
    NoValidResponses,
}

/// Use case for answering one quiz question image
///
/// The extraction call is made exactly once - no retry, no fallback model.
/// Panel members are queried concurrently and failure-isolated: a member
/// that errors or returns an unparseable reply abstains without affecting
/// the others. The question fails only when extraction fails or when the
/// entire panel abstained.
pub struct ResolveQuestionUseCase {
    gateway: Arc<dyn CompletionGateway>,
    extraction_model: Model,
    panel: Vec<Model>,
}

impl ResolveQuestionUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, extraction_model: Model, panel: Vec<Model>) -> Self {
        Self {
            gateway,
            extraction_model,
            panel,
        }
    }

    /// With the reference deployment's models
    pub fn with_defaults(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self::new(gateway, Model::default_extraction(), Model::default_panel())
    }

    /// Resolve one question image into its winning answer options
    ///
    /// Returns the sorted winners of the panel vote. An empty vec means
    /// the panel responded and agreed that no option is correct - distinct
    /// from [`ResolveQuestionError::NoValidResponses`], where nothing
    /// responded at all.
    pub async fn resolve(
        &self,
        locator: &ImageLocator,
    ) -> Result<Vec<String>, ResolveQuestionError> {
        if self.panel.is_empty() {
            return Err(ResolveQuestionError::EmptyPanel);
        }

        let extracted = self.extract(locator).await?;
        let responses = self.query_panel(&extracted).await;

        if responses.is_empty() {
            return Err(ResolveQuestionError::NoValidResponses);
        }

        let tally = AnswerTally::from_answer_lists(&responses);
        debug!(
            votes = tally.total_votes(),
            max = tally.max_count(),
            "Panel vote tallied"
        );
        Ok(tally.winners())
    }

    /// Step 1: transcribe the question image, exactly once
    async fn extract(
        &self,
        locator: &ImageLocator,
    ) -> Result<ExtractedText, ResolveQuestionError> {
        let request = CompletionRequest::extraction(self.extraction_model.clone(), locator);
        let raw = self
            .gateway
            .complete(request)
            .await
            .map_err(|source| ResolveQuestionError::Extraction {
                model: self.extraction_model.clone(),
                source,
            })?;

        ExtractedText::try_new(raw).ok_or_else(|| ResolveQuestionError::Extraction {
            model: self.extraction_model.clone(),
            source: GatewayError::EmptyResponse,
        })
    }

    /// Step 2: fan out across the panel, collecting valid answer lists
    ///
    /// Each member runs to completion or failure independently; one
    /// member's failure cannot cancel or block the others.
    async fn query_panel(&self, extracted: &ExtractedText) -> Vec<Vec<String>> {
        let mut join_set = JoinSet::new();

        for model in &self.panel {
            let gateway = Arc::clone(&self.gateway);
            let request = CompletionRequest::answer(model.clone(), extracted);
            let model = model.clone();

            join_set.spawn(async move {
                let result = gateway.complete(request).await;
                (model, result)
            });
        }

        let mut responses = Vec::new();

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((model, Ok(reply))) => match parse_answer_list(&reply) {
                    Some(answers) => {
                        info!(%model, votes = answers.len(), "Panel model responded");
                        responses.push(answers);
                    }
                    None => {
                        warn!(%model, "Invalid response format, model abstains");
                    }
                },
                Ok((model, Err(e))) => {
                    warn!(%model, error = %e, "Panel model failed, model abstains");
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        responses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Gateway test double: scripted per-model replies
    ///
    /// `None` for a model means the transport call fails.
    struct ScriptedGateway {
        extraction: Option<String>,
        replies: HashMap<String, Option<String>>,
        extraction_calls: AtomicUsize,
        panel_calls: AtomicUsize,
    }

    impl ScriptedGateway {
        fn new(extraction: Option<&str>, replies: &[(Model, Option<&str>)]) -> Self {
            Self {
                extraction: extraction.map(|s| s.to_string()),
                replies: replies
                    .iter()
                    .map(|(m, r)| (m.to_string(), r.map(|s| s.to_string())))
                    .collect(),
                extraction_calls: AtomicUsize::new(0),
                panel_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionGateway for ScriptedGateway {
        async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
            if request.image_url.is_some() {
                self.extraction_calls.fetch_add(1, Ordering::SeqCst);
                return self
                    .extraction
                    .clone()
                    .ok_or(GatewayError::RequestFailed("image fetch failed".to_string()));
            }
            self.panel_calls.fetch_add(1, Ordering::SeqCst);
            match self.replies.get(request.model.as_str()) {
                Some(Some(reply)) => Ok(reply.clone()),
                Some(None) => Err(GatewayError::Timeout),
                None => Err(GatewayError::RequestFailed("unknown model".to_string())),
            }
        }
    }

    fn locator() -> ImageLocator {
        ImageLocator::new("https://example.com/w1q1.PNG")
    }

    fn panel3() -> Vec<Model> {
        vec![
            Model::Qwen3,
            Model::Llama3,
            Model::Gemma2,
        ]
    }

    #[tokio::test]
    async fn test_tied_winners() {
        let gateway = ScriptedGateway::new(
            Some("Q1. Pick\nA) x\nB) y"),
            &[
                (Model::Qwen3, Some(r#"{"correct_answers": ["A"]}"#)),
                (Model::Llama3, Some(r#"{"correct_answers": ["A", "B"]}"#)),
                (Model::Gemma2, Some(r#"{"correct_answers": ["B"]}"#)),
            ],
        );
        let use_case = ResolveQuestionUseCase::new(
            Arc::new(gateway),
            Model::default_extraction(),
            panel3(),
        );

        let answers = use_case.resolve(&locator()).await.unwrap();
        assert_eq!(answers, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_majority_winner() {
        let gateway = ScriptedGateway::new(
            Some("Q1..."),
            &[
                (Model::Qwen3, Some(r#"{"correct_answers": ["C"]}"#)),
                (Model::Llama3, Some(r#"{"correct_answers": ["C"]}"#)),
                (Model::Gemma2, Some(r#"{"correct_answers": ["D"]}"#)),
            ],
        );
        let use_case = ResolveQuestionUseCase::new(
            Arc::new(gateway),
            Model::default_extraction(),
            panel3(),
        );

        let answers = use_case.resolve(&locator()).await.unwrap();
        assert_eq!(answers, vec!["C"]);
    }

    #[tokio::test]
    async fn test_all_abstain_is_no_valid_responses() {
        let gateway = ScriptedGateway::new(
            Some("Q1..."),
            &[
                (Model::Qwen3, None),
                (Model::Llama3, Some("I think the answer is A")),
                (Model::Gemma2, None),
            ],
        );
        let use_case = ResolveQuestionUseCase::new(
            Arc::new(gateway),
            Model::default_extraction(),
            panel3(),
        );

        let err = use_case.resolve(&locator()).await.unwrap_err();
        assert!(matches!(err, ResolveQuestionError::NoValidResponses));
    }

    #[tokio::test]
    async fn test_valid_empty_lists_are_not_abstentions() {
        // Every model agreed no option is correct: that is a valid empty
        // result, not a NoValidResponses failure.
        let gateway = ScriptedGateway::new(
            Some("Q1..."),
            &[
                (Model::Qwen3, Some(r#"{"correct_answers": []}"#)),
                (Model::Llama3, Some(r#"{"correct_answers": []}"#)),
                (Model::Gemma2, Some(r#"{"correct_answers": []}"#)),
            ],
        );
        let use_case = ResolveQuestionUseCase::new(
            Arc::new(gateway),
            Model::default_extraction(),
            panel3(),
        );

        let answers = use_case.resolve(&locator()).await.unwrap();
        assert!(answers.is_empty());
    }

    #[tokio::test]
    async fn test_one_valid_empty_among_abstentions() {
        let gateway = ScriptedGateway::new(
            Some("Q1..."),
            &[
                (Model::Qwen3, Some(r#"{"correct_answers": []}"#)),
                (Model::Llama3, None),
                (Model::Gemma2, Some("not json")),
            ],
        );
        let use_case = ResolveQuestionUseCase::new(
            Arc::new(gateway),
            Model::default_extraction(),
            panel3(),
        );

        let answers = use_case.resolve(&locator()).await.unwrap();
        assert!(answers.is_empty());
    }

    #[tokio::test]
    async fn test_extraction_failure_skips_panel() {
        let gateway = Arc::new(ScriptedGateway::new(
            None,
            &[(Model::Qwen3, Some(r#"{"correct_answers": ["A"]}"#))],
        ));
        let gateway_clone: Arc<dyn CompletionGateway> = gateway.clone();
        let use_case =
            ResolveQuestionUseCase::new(gateway_clone, Model::default_extraction(), panel3());

        let err = use_case.resolve(&locator()).await.unwrap_err();
        assert!(matches!(err, ResolveQuestionError::Extraction { .. }));
        assert_eq!(gateway.extraction_calls.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.panel_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_panel_rejected() {
        let gateway = ScriptedGateway::new(Some("Q1..."), &[]);
        let use_case =
            ResolveQuestionUseCase::new(Arc::new(gateway), Model::default_extraction(), vec![]);

        let err = use_case.resolve(&locator()).await.unwrap_err();
        assert!(matches!(err, ResolveQuestionError::EmptyPanel));
    }
}
