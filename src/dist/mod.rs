//! Distribution of the HoneyOS components.
//!
//! A distribution builds the hvm bundle, the wasm kernel and the website (or
//! the subset a target selects) and collects the results in one output
//! directory.

pub mod builder;
pub mod error;
pub mod settings;
pub mod steps;
pub mod utils;

pub use builder::{
    Availability, Component, DistributionReport, Distributor, StepOutcome, SystemTool, ToolExit,
    Toolchain,
};
pub use error::{Error, Result};
pub use settings::{Settings, SettingsBuilder};
