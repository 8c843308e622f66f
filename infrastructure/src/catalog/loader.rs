//! Course catalog loader
//!
//! Loads the course list from a TOML file:
//!
//! ```toml
//! [[courses]]
//! id = "noc25_cs107"
//! name = "Cloud Computing"
//! ```
//!
//! Entries are normalized through the domain rules (trimmed ids, hyphens
//! replaced with underscores, blank ids dropped). A missing or malformed
//! file is logged and degrades to the fallback course rather than failing
//! startup.

use quizpanel_domain::{Course, CourseCatalog};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Course guaranteed to be present in every catalog
const FALLBACK_COURSE: (&str, &str) = ("noc25_cs107", "Cloud Computing");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Raw TOML structure of the catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    courses: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    #[serde(default)]
    name: String,
}

/// Catalog file loader
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and normalize a catalog file
    pub fn load(path: &Path) -> Result<CourseCatalog, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&raw)?;

        let mut courses: Vec<Course> = file
            .courses
            .into_iter()
            .filter_map(|entry| Course::normalized(entry.id, entry.name))
            .collect();

        if !courses.iter().any(|c| c.id == FALLBACK_COURSE.0) {
            courses.push(fallback_course());
        }

        info!(count = courses.len(), path = %path.display(), "Loaded course catalog");
        Ok(CourseCatalog::new(courses))
    }

    /// Load a catalog, degrading to the fallback course on any error
    pub fn load_or_fallback(path: &Path) -> CourseCatalog {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Falling back to built-in catalog");
                Self::fallback()
            }
        }
    }

    /// Catalog containing only the fallback course
    pub fn fallback() -> CourseCatalog {
        CourseCatalog::new(vec![fallback_course()])
    }
}

fn fallback_course() -> Course {
    Course {
        id: FALLBACK_COURSE.0.to_string(),
        name: FALLBACK_COURSE.1.to_string(),
    }
}
