//! Build step outcomes and the per-run distribution report.

use std::fmt;
use std::path::PathBuf;

/// A distributable part of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The hvm virtual machine bundle
    Hvm,
    /// The wasm kernel
    Kernel,
    /// The static website
    Website,
}

impl Component {
    /// Order in which a distribution runs the components.
    pub const ORDER: [Component; 3] = [Component::Hvm, Component::Kernel, Component::Website];

    /// Returns the label used on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Component::Hvm => "hvm",
            Component::Kernel => "kernel",
            Component::Website => "website",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one build step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step produced its artifacts.
    Success {
        /// Files written into the output directory
        artifacts: Vec<PathBuf>,
    },
    /// The toolchain ran but the step did not complete.
    Failure {
        /// What went wrong
        reason: String,
    },
    /// The toolchain is unavailable; nothing was attempted.
    Aborted {
        /// Why the toolchain is unusable
        reason: String,
    },
}

impl StepOutcome {
    /// Returns `true` for [`StepOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Success { .. })
    }

    /// Returns the artifacts of a successful step.
    pub fn artifacts(&self) -> &[PathBuf] {
        match self {
            StepOutcome::Success { artifacts } => artifacts,
            _ => &[],
        }
    }

    pub(crate) fn failure(reason: impl fmt::Display) -> Self {
        StepOutcome::Failure {
            reason: reason.to_string(),
        }
    }
}

/// Outcomes of the steps that ran during one distribution, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionReport {
    steps: Vec<(Component, StepOutcome)>,
}

impl DistributionReport {
    pub(crate) fn record(&mut self, component: Component, outcome: StepOutcome) {
        self.steps.push((component, outcome));
    }

    /// Returns the recorded steps in execution order.
    pub fn steps(&self) -> &[(Component, StepOutcome)] {
        &self.steps
    }

    /// Returns the outcome of `component`, if it ran.
    pub fn outcome(&self, component: Component) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|(c, _)| *c == component)
            .map(|(_, outcome)| outcome)
    }

    /// Returns `true` if every step that ran succeeded.
    pub fn is_success(&self) -> bool {
        self.steps.iter().all(|(_, outcome)| outcome.is_success())
    }

    /// Returns every artifact produced by successful steps.
    pub fn artifacts(&self) -> impl Iterator<Item = &PathBuf> {
        self.steps.iter().flat_map(|(_, outcome)| outcome.artifacts())
    }
}
