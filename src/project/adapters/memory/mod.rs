//! In-memory project store.

mod project;

pub use project::InMemoryProjectRepository;
