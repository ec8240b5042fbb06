//! slangd release builder - cross-compiles, signs and archives slangd.
//!
//! This binary produces one versioned archive per (OS, architecture) pair of
//! the release matrix in the release directory.

use slangd_release::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
