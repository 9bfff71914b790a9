//! Shared helpers for the distribution steps.

pub mod fs;
