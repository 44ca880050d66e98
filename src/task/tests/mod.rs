//! Unit tests for the task query and association engine.
