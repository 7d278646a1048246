//
//  gitlink
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gitlink::cli::{Cli, Commands};
use gitlink::output::{OutputFormat, OutputWriter};
use gitlink::{exit_codes, LinkError};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    let err = match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => e,
    };

    let code = match err.downcast_ref::<LinkError>() {
        Some(link_err) if link_err.is_cancelled() => std::process::exit(link_err.exit_code()),
        Some(link_err) => link_err.exit_code(),
        None => exit_codes::ERROR,
    };
    OutputWriter::new(OutputFormat::Text).write_error(&format!("{err:#}"));
    std::process::exit(code)
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("GITLINK_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Url(cmd) => cmd.run(&cli.global).await,
        Commands::Open(cmd) => cmd.run(&cli.global).await,
        Commands::Copy(cmd) => cmd.run(&cli.global).await,
        Commands::Snippet(cmd) => cmd.run(&cli.global).await,
        Commands::Image(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("gitlink version {}", gitlink::VERSION);
            Ok(())
        }
    }
}
