//! Command line argument parsing.
//!
//! clap handles the global flags; the action and its arguments are collected
//! verbatim and resolved by [`resolve`](super::resolve).

use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::dist::{Settings, SettingsBuilder};

/// Build, distribute and serve HoneyOS
#[derive(Parser, Debug)]
#[command(
    name = "devtools",
    version,
    about = "Build, distribute and serve HoneyOS",
    long_about = "Builds the hvm virtual machine bundle, the wasm kernel and the website into one output directory.

Usage:
  devtools dist                 distribute everything into ./dist
  devtools dist kernel          compile only the kernel
  devtools --root ../honeyos serve
  devtools --port 9000 serve

Run `devtools help` for the list of actions."
)]
pub struct Args {
    /// Project root; every project path is resolved against it
    #[arg(short = 'C', long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output directory (default: <root>/dist)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Host the local server binds (default: 127.0.0.1)
    #[arg(long, value_name = "IP")]
    pub host: Option<IpAddr>,

    /// Port the local server binds (default: 8080)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Action followed by its arguments: help | list-targets | dist [target] | serve
    #[arg(
        value_name = "ACTION",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub action: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the distribution settings from the global flags.
    pub fn settings(&self) -> crate::dist::Result<Settings> {
        let mut builder = SettingsBuilder::new();
        if let Some(root) = &self.root {
            builder = builder.project_root(root);
        }
        if let Some(out_dir) = &self.out_dir {
            builder = builder.out_dir(out_dir);
        }
        if let Some(host) = self.host {
            builder = builder.serve_host(host);
        }
        if let Some(port) = self.port {
            builder = builder.serve_port(port);
        }
        builder.build()
    }
}
