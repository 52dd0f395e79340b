// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The interactive calendar, the default command.

use std::error::Error;

use clap::{ArgMatches, Command};
use slotcal_core::Session;

use crate::arg::ViewArgs;
use crate::config::Config;
use crate::tui;

#[derive(Debug, Clone, Default)]
pub struct CmdTui {
    pub view: ViewArgs,
}

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open the interactive calendar")
            .args(ViewArgs::args())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            view: ViewArgs::from(matches),
        }
    }

    pub async fn run(self, mut session: Session, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "starting the interactive calendar...");
        self.view.apply(&mut session)?;

        let session = tui::run_calendar(session, &config)?;
        tracing::info!(events = session.store().len(), "calendar closed");
        Ok(())
    }
}
