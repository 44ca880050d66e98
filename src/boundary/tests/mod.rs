//! Unit tests for the request boundary.
