//! Session hooks - lifecycle hooks for AI coding assistant sessions.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use session_hooks::cli::{self, console::Completion, Cli, Commands};
use session_hooks::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the hook payload
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("session_hooks=warn")),
        )
        .init();

    // Hooks must never fail the host, even on a bad invocation
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let config = Config::from_env();

    match cli.command {
        Commands::CheckConsoleLog => match cli::console::run(&config).await {
            Ok(Completion::Finished) => {}
            Ok(Completion::Abandoned) => {
                // The blocking stdin reader cannot be cancelled; skip runtime shutdown
                std::process::exit(0);
            }
            Err(e) => error!(error = %e, "Console check failed"),
        },
        Commands::SuggestCompact => cli::compact::run(&config),
        Commands::Config => {
            if let Err(e) = cli::config::show(&config) {
                error!(error = %e, "Failed to print configuration");
            }
        }
    }

    ExitCode::SUCCESS
}
