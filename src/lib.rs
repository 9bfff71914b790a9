//! HoneyOS developer tooling
//!
//! This library provides the distribution pipeline of the HoneyOS project:
//! - bundling the `hvm` virtual machine with npm
//! - compiling the wasm kernel with clang
//! - assembling the static website
//! - serving the result locally for debugging
//!
//! It backs the `devtools` binary and can be driven directly as a library.

pub mod cli;
pub mod dist;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use error::{CliError, DevtoolsError, Result};
