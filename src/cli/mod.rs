//! Command line interface for the devtools.
//!
//! Parses the invocation, resolves the action and dispatches it to the
//! distributor and the local server.

mod args;
mod resolve;

pub use args::Args;
pub use resolve::{Action, DistTarget, InvocationArgs, resolve};

use crate::dist::{Distributor, Toolchain, builder::log_artifact_summary};
use crate::error::Result;
use crate::server;
use tokio_util::sync::CancellationToken;

/// Usage text printed by `help` and after argument errors.
pub const HELP_MESSAGE: &str = "devtools {action} {options}
actions:
    - help: # Show this help screen
    - list-targets: # List the distribution targets
    - dist: [(all)|hvm|kernel|website] # Build and distribute a part of the project
    - serve: # Serve the website on a local http server (for debugging)
options:
    -C, --root <DIR>      project root (default: current directory)
    -o, --out-dir <DIR>   output directory (default: <root>/dist)
        --host <IP>       serve host (default: 127.0.0.1)
    -p, --port <PORT>     serve port (default: 8080)";

/// Exit code for a completed invocation.
pub const EXIT_OK: i32 = 0;

/// Exit code when a distribution step did not succeed.
pub const EXIT_STEP_FAILED: i32 = 1;

/// Exit code for unusable arguments.
pub const EXIT_USAGE: i32 = 2;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let invocation = resolve(&args.action);

    if let Some(error) = &invocation.error {
        eprintln!("{}", error);
        println!("{}", HELP_MESSAGE);
        return Ok(EXIT_USAGE);
    }

    match invocation.action {
        Action::Help => {
            println!("{}", HELP_MESSAGE);
            Ok(EXIT_OK)
        }
        Action::ListTargets => {
            let labels: Vec<_> = DistTarget::VARIANTS.iter().map(|t| t.label()).collect();
            println!("{}", labels.join(" "));
            Ok(EXIT_OK)
        }
        Action::Distribute => {
            let distributor = Distributor::new(args.settings()?);
            distribute(&distributor, invocation.target).await
        }
        Action::Serve => {
            let shutdown = CancellationToken::new();
            let on_interrupt = shutdown.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_interrupt.cancel();
                }
            });

            serve(&Distributor::new(args.settings()?), shutdown).await
        }
    }
}

/// Distributes every component, then serves the output directory until
/// `shutdown` is cancelled.
///
/// The server starts even when a step did not succeed; the returned exit code
/// still reflects the distribution.
pub async fn serve<C: Toolchain, P: Toolchain>(
    distributor: &Distributor<C, P>,
    shutdown: CancellationToken,
) -> Result<i32> {
    let code = distribute(distributor, DistTarget::All).await?;
    if code != EXIT_OK {
        log::warn!("Distribution incomplete; serving whatever was produced");
    }

    let settings = distributor.settings();
    let listener = server::bind(settings.serve_addr())?;
    server::serve(listener, settings.out_dir(), shutdown).await?;
    Ok(code)
}

async fn distribute<C: Toolchain, P: Toolchain>(
    distributor: &Distributor<C, P>,
    target: DistTarget,
) -> Result<i32> {
    let settings = distributor.settings();
    log::info!(
        "Distributing `{}` from {} into {}",
        target,
        settings.project_root().display(),
        settings.out_dir().display()
    );

    let report = distributor.distribute(target).await?;
    log_artifact_summary(&report).await;

    if report.is_success() {
        Ok(EXIT_OK)
    } else {
        Ok(EXIT_STEP_FAILED)
    }
}
