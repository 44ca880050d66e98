//! Adapter implementations of the project ports.

pub mod memory;
