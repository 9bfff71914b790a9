//! Builder for constructing Settings.

use super::{
    HVM_OUTPUT, HvmSettings, FAVICON_NAME, KERNEL_COMPILER_FLAGS, KERNEL_OUTPUT, KERNEL_SOURCES,
    KernelSettings, Settings, WebsiteSettings,
};
use crate::dist::error::{Context, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Output directory name, relative to the project root.
pub const DIST_DIRECTORY: &str = "dist";

/// Default host of the local server.
pub const SERVE_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default port of the local server.
pub const SERVE_PORT: u16 = 8080;

/// Builder for constructing [`Settings`].
///
/// Every unset field falls back to the HoneyOS repository layout:
///
/// | setting        | default                          |
/// |----------------|----------------------------------|
/// | project root   | current working directory        |
/// | output dir     | `<root>/dist`                    |
/// | kernel dir     | `<root>/kernel`                  |
/// | hvm dir        | `<root>/hvm`                     |
/// | website assets | `<root>/website`                 |
/// | branding icon  | `<root>/branding/icons/honeyos.ico` |
/// | serve address  | `127.0.0.1:8080`                 |
///
/// Relative overrides are resolved against the project root.
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    kernel_dir: Option<PathBuf>,
    hvm_dir: Option<PathBuf>,
    website_dir: Option<PathBuf>,
    icon: Option<PathBuf>,
    serve_host: Option<IpAddr>,
    serve_port: Option<u16>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root.
    ///
    /// Default: the current working directory
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory.
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the kernel project directory.
    pub fn kernel_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.kernel_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the virtual machine npm project directory.
    pub fn hvm_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.hvm_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the website asset directory.
    pub fn website_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.website_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the branding icon copied to `favicon.ico`.
    pub fn icon<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.icon = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the host the local server binds.
    pub fn serve_host(mut self, host: IpAddr) -> Self {
        self.serve_host = Some(host);
        self
    }

    /// Sets the port the local server binds.
    pub fn serve_port(mut self, port: u16) -> Self {
        self.serve_port = Some(port);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or the
    /// project root cannot be made absolute.
    pub fn build(self) -> Result<Settings> {
        let root = match self.project_root {
            Some(root) => root,
            None => std::env::current_dir().context("determining the current directory")?,
        };
        let root = root
            .absolutize()
            .fs_context("resolving project root", &root)?
            .into_owned();

        let under_root = |path: Option<PathBuf>, default: &str| -> PathBuf {
            let path = path.unwrap_or_else(|| PathBuf::from(default));
            if path.is_absolute() {
                path
            } else {
                root.join(path)
            }
        };

        let out_dir = under_root(self.out_dir, DIST_DIRECTORY);
        let kernel_dir = under_root(self.kernel_dir, "kernel");
        let hvm_dir = under_root(self.hvm_dir, "hvm");
        let website_dir = under_root(self.website_dir, "website");
        let icon = under_root(self.icon, "branding/icons/honeyos.ico");

        let kernel = KernelSettings {
            sources: KERNEL_SOURCES.iter().map(|s| kernel_dir.join(s)).collect(),
            dir: kernel_dir,
            compiler_flags: KERNEL_COMPILER_FLAGS.iter().map(|f| f.to_string()).collect(),
            output_name: KERNEL_OUTPUT.to_string(),
        };

        let hvm = HvmSettings {
            dir: hvm_dir,
            install_args: vec!["install".to_string()],
            build_args: vec!["run".to_string(), "dist".to_string()],
            output_name: HVM_OUTPUT.to_string(),
        };

        let website = WebsiteSettings {
            assets_dir: website_dir,
            icon,
            icon_name: FAVICON_NAME.to_string(),
        };

        let serve_addr = SocketAddr::new(
            self.serve_host.unwrap_or(SERVE_HOST),
            self.serve_port.unwrap_or(SERVE_PORT),
        );

        Ok(Settings::new(root, out_dir, kernel, hvm, website, serve_addr))
    }
}
