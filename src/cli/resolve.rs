//! Resolution of the action arguments into an [`InvocationArgs`].

use crate::dist::Component;
use crate::error::CliError;
use std::fmt;

/// The action to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Print the usage text
    #[default]
    Help,
    /// Print the distribution targets
    ListTargets,
    /// Distribute a target
    Distribute,
    /// Distribute everything, then serve the output directory
    Serve,
}

/// The distribution target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistTarget {
    /// Every component
    #[default]
    All,
    /// The hvm virtual machine bundle
    Hvm,
    /// The wasm kernel
    Kernel,
    /// The static website
    Website,
}

impl DistTarget {
    /// Every target, in the order they are listed to users.
    pub const VARIANTS: [DistTarget; 4] = [
        DistTarget::All,
        DistTarget::Hvm,
        DistTarget::Kernel,
        DistTarget::Website,
    ];

    /// Parses a command line token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::VARIANTS.into_iter().find(|t| t.label() == token)
    }

    /// Returns the command line token.
    pub fn label(self) -> &'static str {
        match self {
            DistTarget::All => "all",
            DistTarget::Hvm => "hvm",
            DistTarget::Kernel => "kernel",
            DistTarget::Website => "website",
        }
    }

    /// Returns `true` if distributing this target includes `component`.
    pub fn selects(self, component: Component) -> bool {
        matches!(
            (self, component),
            (DistTarget::All, _)
                | (DistTarget::Hvm, Component::Hvm)
                | (DistTarget::Kernel, Component::Kernel)
                | (DistTarget::Website, Component::Website)
        )
    }
}

impl fmt::Display for DistTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The resolved arguments of one invocation.
///
/// When `error` is set, `action` and `target` must not be acted upon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvocationArgs {
    /// Requested action
    pub action: Action,
    /// Requested target (always [`DistTarget::All`] for [`Action::Serve`])
    pub target: DistTarget,
    /// Why the arguments are unusable
    pub error: Option<CliError>,
}

impl InvocationArgs {
    fn with_error(mut self, error: CliError) -> Self {
        self.error = Some(error);
        self
    }
}

/// Resolve the action arguments (program name excluded).
///
/// ```
/// use honeyos_devtools::cli::{resolve, Action, DistTarget};
///
/// let args = resolve(["dist", "kernel"]);
/// assert_eq!(args.action, Action::Distribute);
/// assert_eq!(args.target, DistTarget::Kernel);
/// assert!(args.error.is_none());
/// ```
pub fn resolve<I, S>(args: I) -> InvocationArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    let resolved = InvocationArgs::default();

    let Some(action) = args.next() else {
        return resolved.with_error(CliError::NoAction);
    };

    match action.as_ref() {
        "help" => resolved,
        "list-targets" => InvocationArgs {
            action: Action::ListTargets,
            ..resolved
        },
        "dist" => {
            let resolved = InvocationArgs {
                action: Action::Distribute,
                ..resolved
            };
            match args.next() {
                None => resolved,
                Some(token) => match DistTarget::from_token(token.as_ref()) {
                    Some(target) => InvocationArgs { target, ..resolved },
                    None => {
                        resolved.with_error(CliError::InvalidTarget(token.as_ref().to_string()))
                    }
                },
            }
        }
        // Serving needs every component, whatever follows.
        "serve" => InvocationArgs {
            action: Action::Serve,
            target: DistTarget::All,
            ..resolved
        },
        other => resolved.with_error(CliError::InvalidAction(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_selection_is_isolated() {
        assert!(DistTarget::Website.selects(Component::Website));
        assert!(!DistTarget::Website.selects(Component::Kernel));
        assert!(!DistTarget::Website.selects(Component::Hvm));
        assert!(Component::ORDER.iter().all(|c| DistTarget::All.selects(*c)));
    }

    #[test]
    fn tokens_round_trip_through_labels() {
        for target in DistTarget::VARIANTS {
            assert_eq!(DistTarget::from_token(target.label()), Some(target));
        }
        assert_eq!(DistTarget::from_token("ALL"), None);
    }
}
