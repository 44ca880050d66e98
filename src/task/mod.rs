//! Task query and association engine.
//!
//! Creates, queries, updates, and deletes task records, validating owning
//! project references against the project store at write time and enriching
//! read results with a denormalised project summary resolved in a single
//! batched lookup. The module follows hexagonal architecture:
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
