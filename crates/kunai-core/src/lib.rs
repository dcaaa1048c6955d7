//! Shared building blocks for the kunai crates: configuration and the
//! dependency-free error type.

pub mod config;
pub mod error;
