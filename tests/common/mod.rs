//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use honeyos_devtools::dist::{
    Availability, Error, Result, Settings, SettingsBuilder, ToolExit, Toolchain,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Creates a project tree with every input a full distribution reads.
pub fn project() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp project");
    let root = dir.path();

    write(root, "website/index.html", "<h1>HoneyOS</h1>");
    write(root, "website/js/index.js", "console.log('honey');");
    write(root, "branding/icons/honeyos.ico", "ICON");
    write(root, "hvm/dist/hvm.min.js", "/* hvm */");
    write(root, "kernel/source/main.c", "int main(void) { return 0; }");

    dir
}

/// Writes `contents` to `root/rel`, creating parent directories.
pub fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().expect("fixture path has a parent"))
        .expect("create fixture directory");
    std::fs::write(path, contents).expect("write fixture file");
}

/// Settings rooted at `root`.
pub fn settings(root: &Path) -> Settings {
    SettingsBuilder::new()
        .project_root(root)
        .build()
        .expect("build settings")
}

/// A toolchain that records every call instead of running anything.
#[derive(Clone)]
pub struct RecordingTool {
    name: String,
    available: bool,
    exit_code: i32,
    startable: bool,
    calls: Arc<Mutex<Vec<String>>>,
    cwds: Arc<Mutex<Vec<Option<PathBuf>>>>,
}

impl RecordingTool {
    pub fn available(name: &str) -> Self {
        Self {
            name: name.to_string(),
            available: true,
            exit_code: 0,
            startable: true,
            calls: Arc::default(),
            cwds: Arc::default(),
        }
    }

    pub fn missing(name: &str) -> Self {
        Self {
            available: false,
            ..Self::available(name)
        }
    }

    pub fn failing(name: &str, exit_code: i32) -> Self {
        Self {
            exit_code,
            ..Self::available(name)
        }
    }

    /// Probes fine, but every run fails to start the process.
    pub fn unstartable(name: &str) -> Self {
        Self {
            startable: false,
            ..Self::available(name)
        }
    }

    /// Calls so far: `probe` for probes, the joined arguments for runs.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Working directories of the runs so far.
    pub fn cwds(&self) -> Vec<Option<PathBuf>> {
        self.cwds.lock().expect("cwds lock").clone()
    }
}

impl Toolchain for RecordingTool {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe(&self) -> Availability {
        self.calls.lock().expect("calls lock").push("probe".to_string());
        if self.available {
            Availability::Available {
                path: PathBuf::from(&self.name),
                version: "test".to_string(),
            }
        } else {
            Availability::Missing {
                reason: format!("{} installation not found on host system", self.name),
            }
        }
    }

    async fn run(&self, args: &[String], cwd: Option<&Path>) -> Result<ToolExit> {
        self.calls.lock().expect("calls lock").push(args.join(" "));
        self.cwds
            .lock()
            .expect("cwds lock")
            .push(cwd.map(Path::to_path_buf));
        if !self.startable {
            return Err(Error::GenericError(format!(
                "failed to start `{}`: No such file or directory",
                self.name
            )));
        }
        Ok(ToolExit::from_code(Some(self.exit_code)))
    }
}

/// Relative paths of every file below `dir`, sorted.
pub fn files_under(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path()
                .strip_prefix(dir)
                .ok()
                .map(|p| p.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    files.sort();
    files
}
