//! Taskdeck: a small task-tracking service core.
//!
//! Users register and authenticate, create projects, and create, query,
//! update, and delete tasks attached to projects. The crate contains the two
//! server-side components with non-trivial logic — credential and session
//! handling, and the task query and association engine — together with the
//! ports they consume and the request-boundary collaborators they expose.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//! - **Services**: Request-scoped orchestration over the ports
//!
//! # Modules
//!
//! - [`auth`]: Credential verification and stateless session tokens
//! - [`project`]: Project catalogue and the project store port
//! - [`task`]: Task query, filtering, and project association
//! - [`boundary`]: Error presentation and per-operation request validation
//! - [`config`]: Explicit runtime configuration

pub mod auth;
pub mod boundary;
pub mod config;
pub mod project;
pub mod task;
