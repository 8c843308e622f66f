//! Image locator value objects
//!
//! An [`ImageLocator`] identifies the rendered image of one quiz question.
//! Locators are built from a deployment-specific [`LocatorTemplate`] keyed
//! by course, week, and question number.

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Opaque URL identifying one question's rendered image (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageLocator(String);

impl ImageLocator {
    /// Create a new locator
    ///
    /// # Panics
    /// Panics if the locator is empty or only whitespace
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        assert!(!url.trim().is_empty(), "Image locator cannot be empty");
        Self(url)
    }

    /// Try to create a new locator, returning None if invalid
    pub fn try_new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            None
        } else {
            Some(Self(url))
        }
    }

    /// Get the locator as a URL string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner URL
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ImageLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL template for question images (Value Object)
///
/// The template carries `{course}`, `{week}` and `{question}` placeholders
/// which are substituted when rendering a locator. The default template
/// points at the NPTEL assignment image store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocatorTemplate(String);

/// Reference deployment template (NPTEL/Swayam assignment images)
pub const DEFAULT_LOCATOR_TEMPLATE: &str =
    "https://storage.googleapis.com/swayam-node1-production.appspot.com/assets/img/{course}/w{week}q{question}.PNG";

impl LocatorTemplate {
    /// Create a template, validating that all placeholders are present
    pub fn new(template: impl Into<String>) -> Result<Self, DomainError> {
        let template = template.into();
        for placeholder in ["{course}", "{week}", "{question}"] {
            if !template.contains(placeholder) {
                return Err(DomainError::InvalidTemplate(format!(
                    "missing {} placeholder",
                    placeholder
                )));
            }
        }
        Ok(Self(template))
    }

    /// Render the locator for one question
    pub fn render(&self, course_id: &str, week: u32, question_num: u32) -> ImageLocator {
        let url = self
            .0
            .replace("{course}", course_id)
            .replace("{week}", &week.to_string())
            .replace("{question}", &question_num.to_string());
        ImageLocator::new(url)
    }

    /// Get the raw template string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LocatorTemplate {
    fn default() -> Self {
        Self(DEFAULT_LOCATOR_TEMPLATE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_creation() {
        let locator = ImageLocator::new("https://example.com/q1.png");
        assert_eq!(locator.as_str(), "https://example.com/q1.png");
    }

    #[test]
    #[should_panic]
    fn test_empty_locator_panics() {
        ImageLocator::new("  ");
    }

    #[test]
    fn test_try_new() {
        assert!(ImageLocator::try_new("").is_none());
        assert!(ImageLocator::try_new("https://example.com/x.png").is_some());
    }

    #[test]
    fn test_default_template_render() {
        let template = LocatorTemplate::default();
        let locator = template.render("noc25_cs107", 3, 7);
        assert_eq!(
            locator.as_str(),
            "https://storage.googleapis.com/swayam-node1-production.appspot.com/assets/img/noc25_cs107/w3q7.PNG"
        );
    }

    #[test]
    fn test_template_requires_placeholders() {
        let err = LocatorTemplate::new("https://example.com/{course}/w{week}.png");
        assert!(err.is_err());

        let ok = LocatorTemplate::new("{course}/{week}/{question}");
        assert!(ok.is_ok());
    }
}
