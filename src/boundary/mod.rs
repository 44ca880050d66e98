//! Request-boundary collaborators.
//!
//! The core components raise errors at the point of detection and propagate
//! them unmodified; this module owns the boundary's only policy decision,
//! presentation. It also carries the bearer-token extraction performed in
//! front of every authenticated operation and the explicit per-operation
//! request validators that replace shape-level decorator validation.

pub mod bearer;
pub mod error;
pub mod validate;

#[cfg(test)]
mod tests;
