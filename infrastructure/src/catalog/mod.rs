//! Course catalog file loader

mod loader;

pub use loader::{CatalogError, CatalogLoader};
