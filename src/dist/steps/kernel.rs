//! Kernel compilation - the wasm kernel module.

use crate::dist::{
    Settings,
    builder::{Availability, StepOutcome, Toolchain},
};

/// Compile the kernel into `<outdir>/honey.wasm`.
///
/// # Process
///
/// 1. Probes the compiler; an unusable compiler aborts before any filesystem access
/// 2. Invokes it with the wasm32 target/link flags on the fixed source list
/// 3. Maps the exit status onto [`StepOutcome`]
///
/// Never returns an error: every problem is reported through the outcome.
pub async fn compile<C: Toolchain>(settings: &Settings, compiler: &C) -> StepOutcome {
    if let Availability::Missing { reason } = compiler.probe().await {
        log::warn!("Compiling kernel aborted: {}", reason);
        return StepOutcome::Aborted { reason };
    }

    let kernel = settings.kernel();
    let output = settings.kernel_output();

    let mut args = kernel.compiler_flags.clone();
    args.push("-o".to_string());
    args.push(output.display().to_string());
    args.extend(kernel.sources.iter().map(|s| s.display().to_string()));

    log::info!("Compiling kernel with {} in {}", compiler.name(), kernel.dir.display());

    match compiler.run(&args, Some(&kernel.dir)).await {
        Ok(exit) if exit.success() => {
            log::info!("Kernel compiled successfully: {}", output.display());
            let artifacts = if output.is_file() { vec![output] } else { Vec::new() };
            StepOutcome::Success { artifacts }
        }
        Ok(exit) => {
            log::error!("Compiling kernel failed ({})", exit);
            StepOutcome::failure(format!("{} exited with {}", compiler.name(), exit))
        }
        Err(e) => {
            log::error!("Compiling kernel failed: {}", e);
            StepOutcome::failure(e)
        }
    }
}
