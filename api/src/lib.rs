//! API layer for quizpanel
//!
//! Thin HTTP surface over the application use cases: course lookup and
//! batch question answering. Per-question failures are reported inside a
//! successful response body; HTTP error codes are reserved for malformed
//! requests.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
