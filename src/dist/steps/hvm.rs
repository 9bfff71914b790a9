//! Virtual machine bundling - the `hvm.min.js` script.

use crate::dist::{
    Settings,
    builder::{Availability, StepOutcome, Toolchain},
    utils::fs,
};

/// Bundle the virtual machine and copy it into the output directory.
///
/// # Process
///
/// 1. Probes the package manager; an unusable one aborts the step
/// 2. Runs the install step, then the bundling step, inside the `hvm` project
/// 3. Copies `hvm/dist/hvm.min.js` to `<outdir>/hvm.min.js`
///
/// A non-zero exit from either npm invocation stops the step before the copy.
pub async fn bundle<P: Toolchain>(settings: &Settings, package_manager: &P) -> StepOutcome {
    if let Availability::Missing { reason } = package_manager.probe().await {
        log::warn!("Failed to distribute hvm: {}", reason);
        return StepOutcome::Aborted { reason };
    }

    let hvm = settings.hvm();

    for args in [&hvm.install_args, &hvm.build_args] {
        let command = format!("{} {}", package_manager.name(), args.join(" "));
        log::info!("Running `{}` in {}", command, hvm.dir.display());

        match package_manager.run(args, Some(&hvm.dir)).await {
            Ok(exit) if exit.success() => {}
            Ok(exit) => {
                log::error!("`{}` failed ({})", command, exit);
                return StepOutcome::failure(format!("`{}` exited with {}", command, exit));
            }
            Err(e) => {
                log::error!("`{}` failed: {}", command, e);
                return StepOutcome::failure(e);
            }
        }
    }

    let bundle = hvm.build_output();
    let output = settings.hvm_output();
    match fs::copy_file(&bundle, &output).await {
        Ok(()) => {
            log::info!("Distributed hvm: {}", output.display());
            StepOutcome::Success {
                artifacts: vec![output],
            }
        }
        Err(e) => {
            log::error!("Failed to copy hvm bundle: {}", e);
            StepOutcome::failure(e)
        }
    }
}
