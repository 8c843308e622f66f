//! Course catalog
//!
//! A read-only list of courses with substring search over id and name.
//! The catalog is constructed once at process start and passed by
//! reference into the routing layer; there is no ambient global.

use serde::{Deserialize, Serialize};

/// A course offering (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "course_id")]
    pub id: String,
    #[serde(rename = "course_name")]
    pub name: String,
}

impl Course {
    /// Create a course, normalizing the id
    ///
    /// Ids are trimmed and hyphens are replaced with underscores, matching
    /// the image store's naming (e.g. `noc26-ae07` becomes `noc26_ae07`).
    /// An empty name falls back to the id. Returns None for a blank id.
    pub fn normalized(id: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let id = id.into().trim().replace('-', "_");
        if id.is_empty() || id.eq_ignore_ascii_case("nan") || id.eq_ignore_ascii_case("none") {
            return None;
        }
        let name = name.into().trim().to_string();
        let name = if name.is_empty() { id.clone() } else { name };
        Some(Self { id, name })
    }
}

/// Read-only course catalog with substring search
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// All courses in load order
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by exact id
    pub fn find(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Case-insensitive substring search over id and name
    ///
    /// A blank query returns the full catalog.
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.courses.iter().collect();
        }
        self.courses
            .iter()
            .filter(|c| {
                c.id.to_lowercase().contains(&query) || c.name.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
