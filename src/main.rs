//! HoneyOS devtools - distribute and serve the HoneyOS components.
//!
//! Builds the hvm bundle, the wasm kernel and the website into one output
//! directory, and optionally serves it on a local HTTP server.

use honeyos_devtools::cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
