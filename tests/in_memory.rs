//! End-to-end integration tests over the in-memory adapters.
//!
//! Tests are organized into modules by functionality:
//! - `auth_flow_tests`: Registration, login, bearer authentication
//! - `task_flow_tests`: Request validation, task querying, error presentation

mod in_memory {
    mod auth_flow_tests;
    mod task_flow_tests;
}
