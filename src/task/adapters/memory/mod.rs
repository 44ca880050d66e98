//! In-memory task store.

mod task;

pub use task::InMemoryTaskRepository;
