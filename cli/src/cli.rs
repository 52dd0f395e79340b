// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use chrono::Local;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use futures::{FutureExt, future::LocalBoxFuture};
use slotcal_core::{APP_NAME, Preset, Session};

use crate::cmd_event::CmdEventList;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_tui::CmdTui;
use crate::cmd_view::CmdView;
use crate::config::{Config, parse_config};

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Preset overriding the one in the configuration
    pub preset: Option<Preset>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A keyboard-driven calendar for the terminal.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to tui
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/slotcal/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/slotcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(-p --preset <PRESET> "Start from this preset instead of the configured one")
                    .value_parser(value_parser!(Preset))
                    .global(true),
            )
            .subcommand(CmdTui::command())
            .subcommand(CmdView::command())
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Inspect calendar events")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventList::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdTui::NAME, matches)) => Tui(CmdTui::from(matches)),
            Some((CmdView::NAME, matches)) => View(CmdView::from(matches)),
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Tui(CmdTui::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        let preset = matches.get_one("preset").copied();
        Ok(Cli {
            config,
            preset,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.preset).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Open the interactive calendar
    Tui(CmdTui),

    /// Print a calendar view
    View(CmdView),

    /// List events
    EventList(CmdEventList),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(
        self,
        config: Option<PathBuf>,
        preset: Option<Preset>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Tui(a)       => Self::run_with(config, preset, |s, c| a.run(s, c).boxed_local()).await,
            View(a)      => Self::run_with(config, preset, |s, _| a.run(s).boxed_local()).await,
            EventList(a) => Self::run_with(config, preset, |s, _| a.run(s).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        preset: Option<Preset>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(Session, Config) -> LocalBoxFuture<'static, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (mut core_config, config) = parse_config(config).await?;
        if let Some(preset) = preset {
            core_config.preset = preset;
        }

        let now = Local::now().naive_local();
        let session = Session::new(&core_config, now)?;
        f(session, config).await
    }
}
