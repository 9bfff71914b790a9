//! The individual build steps of a distribution.
//!
//! - [`hvm`] - bundles the virtual machine with the package manager
//! - [`kernel`] - compiles the wasm kernel
//! - [`website`] - merges the static website into the output directory

pub mod hvm;
pub mod kernel;
pub mod website;
