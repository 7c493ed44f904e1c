//! # Tapshop Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments (clap)
//! 2. Initialize tracing (logging to stderr)
//! 3. Load configuration and catalog
//! 4. Run the command, exit non-zero on failure

use clap::Parser;
use tapshop_storefront_lib::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // The actual setup is in lib.rs for testability
    tapshop_storefront_lib::init_tracing();

    if let Err(err) = tapshop_storefront_lib::run(cli) {
        tracing::error!(error = %err, "Command failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
