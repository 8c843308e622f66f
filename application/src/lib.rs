//! Application layer for quizpanel
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
pub use use_cases::resolve_batch::{DEFAULT_QUESTION_COUNT, ResolveBatchInput, ResolveBatchUseCase};
pub use use_cases::resolve_question::{ResolveQuestionError, ResolveQuestionUseCase};
