//! polarion-artifacts-deployer entry point
//!
//! Parses the command line, sets up logging, runs the deployment and maps a
//! failure to the process exit code (a failed Maven invocation exits with
//! its own status modulo 255).

use clap::Parser;
use polarion_artifacts_deployer::cli::Cli;
use polarion_artifacts_deployer::core::{exit_code_for, user_friendly_error};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute().await {
        let code = exit_code_for(&e);
        user_friendly_error(e).display();
        std::process::exit(code);
    }
}
