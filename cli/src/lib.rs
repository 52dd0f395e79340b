// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod cli;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_tui;
mod cmd_view;
mod config;
mod event_formatter;
mod table;
mod text_surface;
mod tui;
mod util;

use std::error::Error;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub use crate::{
    cli::{Cli, Commands},
    config::Config,
};

/// Run the slotcal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    // logs go to stderr so they never mix with printed views or json
    let filter = EnvFilter::try_from_env("SLOTCAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}
