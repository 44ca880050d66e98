//! Service layer for the project catalogue.

mod catalogue;

pub use catalogue::{CatalogueError, CatalogueResult, ProjectCatalogueService};
