//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No panel models configured")]
    EmptyPanel,

    #[error("Invalid image locator: {0}")]
    InvalidLocator(String),

    #[error("Invalid locator template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid course: {0}")]
    InvalidCourse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::EmptyPanel;
        assert_eq!(error.to_string(), "No panel models configured");

        let error = DomainError::InvalidLocator("not a url".to_string());
        assert!(error.to_string().contains("not a url"));
    }
}
