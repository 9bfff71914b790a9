//! Per-component settings for the kernel, the hvm bundle and the website.

use std::path::PathBuf;

/// Name of the compiled kernel module.
pub const KERNEL_OUTPUT: &str = "honey.wasm";

/// Kernel sources, relative to the kernel directory.
pub const KERNEL_SOURCES: &[&str] = &["source/main.c"];

/// Freestanding wasm32 module with imported, shared, thread-capable memory and no entry point.
pub const KERNEL_COMPILER_FLAGS: &[&str] = &[
    "--target=wasm32",
    "-nostdlib",
    "-Wl,--no-entry",
    "-Wl,--import-memory",
    "-Wl,--shared-memory",
    "-pthread",
];

/// Name of the bundled virtual machine script.
pub const HVM_OUTPUT: &str = "hvm.min.js";

/// Name the branding icon is given inside the output directory.
pub const FAVICON_NAME: &str = "favicon.ico";

/// Kernel compilation settings.
///
/// `sources` are absolute: they are resolved against `dir` when the settings
/// are built, never against the process working directory.
#[derive(Debug, Clone)]
pub struct KernelSettings {
    /// Kernel project directory (`<root>/kernel`).
    pub dir: PathBuf,
    /// Source files passed to the compiler.
    pub sources: Vec<PathBuf>,
    /// Target and link flags passed before `-o`.
    pub compiler_flags: Vec<String>,
    /// File name of the module written into the output directory.
    pub output_name: String,
}

/// Virtual machine bundle settings.
#[derive(Debug, Clone)]
pub struct HvmSettings {
    /// The `hvm` npm project directory.
    pub dir: PathBuf,
    /// Arguments of the dependency install step.
    pub install_args: Vec<String>,
    /// Arguments of the bundling step.
    pub build_args: Vec<String>,
    /// Bundle file name, identical in `hvm/dist` and the output directory.
    pub output_name: String,
}

impl HvmSettings {
    /// Where `npm run dist` leaves the bundle.
    pub fn build_output(&self) -> PathBuf {
        self.dir.join("dist").join(&self.output_name)
    }
}

/// Website assembly settings.
#[derive(Debug, Clone)]
pub struct WebsiteSettings {
    /// Static asset tree merged into the output directory.
    pub assets_dir: PathBuf,
    /// Branding icon copied next to the assets.
    pub icon: PathBuf,
    /// File name of the icon inside the output directory.
    pub icon_name: String,
}
