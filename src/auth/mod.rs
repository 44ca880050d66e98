//! Credential and session management.
//!
//! Registers users against the identity store with salted bcrypt password
//! hashes, verifies login credentials without distinguishing unknown emails
//! from wrong passwords, and issues stateless signed session tokens that are
//! verified per request. The module follows hexagonal architecture:
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
