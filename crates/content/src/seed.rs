//! Catalog bundled with the binary so the game is playable without a file.

use crate::catalog::CatalogError;
use crate::repository::InMemoryCatalog;

pub const SEED_CATALOG_JSON: &str = include_str!("../data/seed_catalog.json");

/// # Errors
///
/// Returns `CatalogError` if the bundled catalog fails validation.
pub fn seed_catalog() -> Result<InMemoryCatalog, CatalogError> {
    InMemoryCatalog::from_json(SEED_CATALOG_JSON)
}
