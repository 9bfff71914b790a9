//! Distribution orchestration and coordination.
//!
//! This module provides the [`Distributor`] orchestrator that runs the build
//! steps selected by a target and reports each step's outcome.
//!
//! # Overview
//!
//! The distributor:
//! 1. Ensures the output directory exists
//! 2. Runs the selected steps in the order hvm, kernel, website
//! 3. Contains each step's failure so the remaining steps still run
//! 4. Returns a [`DistributionReport`] of [`StepOutcome`] values
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Distributor`] struct
//! - [`outcome`] - Step outcomes and the distribution report
//! - [`tool_detection`] - External toolchain probing and invocation

mod checksum;
mod orchestrator;
mod outcome;
mod tool_detection;

pub use checksum::calculate_sha256;
pub use orchestrator::{Distributor, log_artifact_summary};
pub use outcome::{Component, DistributionReport, StepOutcome};
pub use tool_detection::{Availability, SystemTool, ToolExit, Toolchain};
