//! Shared helpers

pub mod debug;
