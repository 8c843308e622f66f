//! Application use cases

pub mod resolve_batch;
pub mod resolve_question;
