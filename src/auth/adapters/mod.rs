//! Adapter implementations of the identity ports.

pub mod memory;
