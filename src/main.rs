// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! codesmith - prompt history for AI code generation
//!
//! Entry point for the codesmith CLI application.

use std::io;

use clap::Parser;

use codesmith::cli::{Cli, Commands};
use codesmith::commands;
use codesmith::config::Settings;
use codesmith::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on crate diagnostics; `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "codesmith=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // Load settings
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_from(&settings_path)?;

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::History(args) => {
            let mut stdin = io::stdin().lock();
            commands::history::execute(args, &settings, &cli.format, &mut stdin, &mut stdout)
                .await?;
        }
        Commands::Languages => {
            commands::languages::execute(&cli.format, &mut stdout)?;
        }
        Commands::Settings(args) => {
            commands::settings::execute(args, settings, &settings_path, &mut stdout)?;
        }
    }

    Ok(())
}
