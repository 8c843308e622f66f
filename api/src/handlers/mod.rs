//! HTTP request handlers

pub mod common;
pub mod courses;
pub mod health;
pub mod questions;

pub use courses::get_courses;
pub use health::health;
pub use questions::post_questions;
