//! Core domain types

pub mod error;
pub mod extracted_text;
pub mod locator;
pub mod model;
pub mod outcome;
