//! Port contracts for identity persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the credential
//! service.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
