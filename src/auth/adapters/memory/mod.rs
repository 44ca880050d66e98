//! In-memory identity store.

mod user;

pub use user::InMemoryUserRepository;
