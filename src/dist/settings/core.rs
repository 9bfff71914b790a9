//! Core Settings struct and implementations.

use super::{HvmSettings, KernelSettings, WebsiteSettings};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main settings for distribution and serving.
///
/// Every path, flag and address used by the build steps and the local server
/// lives here, constructed via [`SettingsBuilder`](super::SettingsBuilder).
/// Tests substitute a temporary project root or output directory through the
/// builder.
///
/// # Examples
///
/// ```no_run
/// use honeyos_devtools::dist::SettingsBuilder;
///
/// # fn example() -> honeyos_devtools::dist::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/work/honeyos")
///     .serve_port(9000)
///     .build()?;
/// assert!(settings.out_dir().ends_with("dist"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Absolute project root.
    project_root: PathBuf,

    /// Directory accumulating every artifact.
    out_dir: PathBuf,

    /// Kernel compilation settings.
    kernel: KernelSettings,

    /// Virtual machine bundling settings.
    hvm: HvmSettings,

    /// Website assembly settings.
    website: WebsiteSettings,

    /// Address of the local server.
    serve_addr: SocketAddr,
}

impl Settings {
    /// Returns the absolute project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the kernel settings.
    pub fn kernel(&self) -> &KernelSettings {
        &self.kernel
    }

    /// Path the kernel module is compiled to.
    pub fn kernel_output(&self) -> PathBuf {
        self.out_dir.join(&self.kernel.output_name)
    }

    /// Returns the virtual machine settings.
    pub fn hvm(&self) -> &HvmSettings {
        &self.hvm
    }

    /// Path the virtual machine bundle is copied to.
    pub fn hvm_output(&self) -> PathBuf {
        self.out_dir.join(&self.hvm.output_name)
    }

    /// Returns the website settings.
    pub fn website(&self) -> &WebsiteSettings {
        &self.website
    }

    /// Path the branding icon is copied to.
    pub fn favicon_output(&self) -> PathBuf {
        self.out_dir.join(&self.website.icon_name)
    }

    /// Returns the address the local server binds.
    pub fn serve_addr(&self) -> SocketAddr {
        self.serve_addr
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        project_root: PathBuf,
        out_dir: PathBuf,
        kernel: KernelSettings,
        hvm: HvmSettings,
        website: WebsiteSettings,
        serve_addr: SocketAddr,
    ) -> Self {
        Self {
            project_root,
            out_dir,
            kernel,
            hvm,
            website,
            serve_addr,
        }
    }
}
