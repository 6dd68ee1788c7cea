#![forbid(unsafe_code)]

pub mod catalog;
pub mod repository;
pub mod seed;

pub use catalog::{CatalogError, CatalogFile};
pub use repository::{CatalogRepository, ContentError, InMemoryCatalog};
pub use seed::seed_catalog;
