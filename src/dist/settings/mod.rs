//! Configuration structures for distribution and serving.
//!
//! The paths, compiler flags, file names and serve address used by every
//! component are carried by [`Settings`] instead of module-level constants, so
//! each step receives its configuration explicitly.

mod builder;
mod components;
mod core;

pub use builder::{DIST_DIRECTORY, SERVE_HOST, SERVE_PORT, SettingsBuilder};
pub use components::{
    FAVICON_NAME, HVM_OUTPUT, HvmSettings, KERNEL_COMPILER_FLAGS, KERNEL_OUTPUT, KERNEL_SOURCES,
    KernelSettings, WebsiteSettings,
};
pub use core::Settings;
