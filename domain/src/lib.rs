//! Domain layer for quizpanel
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panel
//!
//! A quiz question is answered by a panel of text models. Each panel member
//! votes for the answer options it believes are correct; the winners are
//! the options with the maximum vote count.
//!
//! ## Abstention
//!
//! A panel member that errors or returns an unparseable reply abstains: it
//! is excluded from the tally without aborting the question. A member that
//! returns a structurally valid *empty* answer list did respond - it simply
//! cast zero votes.

pub mod catalog;
pub mod core;
pub mod prompt;
pub mod tally;

// Re-export commonly used types
pub use catalog::{Course, CourseCatalog};
pub use core::{
    error::DomainError,
    extracted_text::ExtractedText,
    locator::{ImageLocator, LocatorTemplate},
    model::Model,
    outcome::QuestionResult,
};
pub use prompt::PromptTemplate;
pub use tally::{AnswerTally, parsing::parse_answer_list};
