//! Project catalogue.
//!
//! Projects are created by request and read-only thereafter. The catalogue
//! service is thin; the interesting consumer is the task query engine, which
//! resolves task project references against the [`ports::ProjectRepository`]
//! port. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
