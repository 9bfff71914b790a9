//! Error types for the devtools binary.
//!
//! Argument errors ([`CliError`]) stop an invocation before any side effect.
//! Build step problems are not errors at this level; they are reported as
//! [`StepOutcome`](crate::dist::StepOutcome) values.

use std::net::SocketAddr;
use thiserror::Error;

/// Result type alias for devtools operations
pub type Result<T> = std::result::Result<T, DevtoolsError>;

/// Main error type for the devtools binary
#[derive(Error, Debug)]
pub enum DevtoolsError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Distribution errors
    #[error("Distribution error: {0}")]
    Dist(#[from] crate::dist::Error),

    /// The local server could not bind its address
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: SocketAddr,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },

    /// The local server stopped with an error
    #[error("Server error: {0}")]
    Server(String),
}

/// Errors in the action arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// No action was given
    #[error("No action provided")]
    NoAction,

    /// The first argument is not a known action
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// The `dist` target is not a known target
    #[error("Invalid target: {0}")]
    InvalidTarget(String),
}
