// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use slotcal_core::Session;

use crate::arg::{CommonArgs, ViewArgs};
use crate::event_formatter::EventFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub view: ViewArgs,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the events of the current view")
            .args(ViewArgs::args())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            view: ViewArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, mut session: Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        self.view.apply(&mut session)?;
        self.write_to(&session, &mut io::stdout())
    }

    pub fn write_to(&self, session: &Session, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let events: Vec<_> = session.visible_events().collect();
        if events.is_empty() && self.output_format == OutputFormat::Table {
            let locale = session.view().convention().locale;
            writeln!(w, "{}", locale.messages().no_events)?;
            return Ok(());
        }

        let formatter = EventFormatter::new()
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        writeln!(w, "{}", formatter.format(&events))?;
        Ok(())
    }
}
