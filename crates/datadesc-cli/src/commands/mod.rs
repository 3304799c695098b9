//! CLI command implementations.

pub mod describe;
