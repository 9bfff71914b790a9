//! Main distribution orchestration and coordination.
//!
//! This module provides the [`Distributor`] that runs the build steps a
//! [`DistTarget`] selects and collects their outcomes.

use crate::{
    cli::DistTarget,
    dist::{
        Result, Settings,
        steps::{hvm, kernel, website},
        utils::fs,
    },
};

use super::{
    checksum::calculate_sha256,
    outcome::{Component, DistributionReport, StepOutcome},
    tool_detection::{SystemTool, Toolchain},
};

/// Main distribution orchestrator.
///
/// Owns the settings and the two external toolchains, and runs the selected
/// steps sequentially in the order hvm, kernel, website. A failing or aborted
/// step is recorded in the report and the next step still runs; nothing is
/// rolled back.
///
/// # Examples
///
/// ```no_run
/// use honeyos_devtools::cli::DistTarget;
/// use honeyos_devtools::dist::{Distributor, SettingsBuilder};
///
/// # async fn example() -> honeyos_devtools::dist::Result<()> {
/// let settings = SettingsBuilder::new().build()?;
/// let report = Distributor::new(settings).distribute(DistTarget::All).await?;
///
/// for (component, outcome) in report.steps() {
///     println!("{component}: {outcome:?}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Distributor<C = SystemTool, P = SystemTool> {
    settings: Settings,
    compiler: C,
    package_manager: P,
}

impl Distributor {
    /// Creates a distributor using `clang` and `npm` from the host.
    pub fn new(settings: Settings) -> Self {
        Self::with_toolchains(settings, SystemTool::clang(), SystemTool::npm())
    }
}

impl<C: Toolchain, P: Toolchain> Distributor<C, P> {
    /// Creates a distributor with explicit toolchains.
    pub fn with_toolchains(settings: Settings, compiler: C, package_manager: P) -> Self {
        Self {
            settings,
            compiler,
            package_manager,
        }
    }

    /// Returns a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Distributes the components selected by `target`.
    ///
    /// The output directory is created first if it does not exist; existing
    /// contents are kept. Step failures never surface as `Err`; they are
    /// recorded in the returned [`DistributionReport`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the output directory cannot be created.
    pub async fn distribute(&self, target: DistTarget) -> Result<DistributionReport> {
        fs::create_dir_all(self.settings.out_dir()).await?;

        let mut report = DistributionReport::default();

        for component in Component::ORDER {
            if !target.selects(component) {
                continue;
            }

            log::info!("Distributing {}", component);
            let outcome = self.run_step(component).await;
            match &outcome {
                StepOutcome::Success { .. } => log::info!("✓ {} distributed", component),
                StepOutcome::Failure { reason } => {
                    log::error!("✗ {} failed: {}", component, reason)
                }
                StepOutcome::Aborted { reason } => {
                    log::warn!("⚠ {} aborted: {}", component, reason)
                }
            }
            report.record(component, outcome);
        }

        Ok(report)
    }

    async fn run_step(&self, component: Component) -> StepOutcome {
        match component {
            Component::Hvm => hvm::bundle(&self.settings, &self.package_manager).await,
            Component::Kernel => kernel::compile(&self.settings, &self.compiler).await,
            Component::Website => match website::assemble(&self.settings).await {
                Ok(artifacts) => StepOutcome::Success { artifacts },
                Err(e) => StepOutcome::failure(e),
            },
        }
    }
}

/// Logs size and SHA-256 of every artifact in the report.
///
/// Artifacts that can no longer be read are logged as warnings.
pub async fn log_artifact_summary(report: &DistributionReport) {
    for path in report.artifacts() {
        let size = match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.is_file() => metadata.len(),
            Ok(_) => continue,
            Err(e) => {
                log::warn!("Cannot read artifact {}: {}", path.display(), e);
                continue;
            }
        };
        match calculate_sha256(path).await {
            Ok(checksum) => log::info!("  {} ({} bytes) sha256:{}", path.display(), size, checksum),
            Err(e) => log::warn!("Cannot hash artifact {}: {}", path.display(), e),
        }
    }
}
