// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};

use clap::{ArgMatches, Command, arg, value_parser};
use slotcal_core::{CalendarSurface, Session};

use crate::arg::ViewArgs;
use crate::text_surface::TextSurface;

/// Prints the current view of the calendar as text.
#[derive(Debug, Clone)]
pub struct CmdView {
    pub view: ViewArgs,
    pub column_width: Option<usize>,
}

impl CmdView {
    pub const NAME: &str = "view";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("v")
            .about("Print a calendar view")
            .args(ViewArgs::args())
            .arg(
                arg!(--"column-width" <WIDTH> "Width of each day column")
                    .value_parser(value_parser!(usize)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            view: ViewArgs::from(matches),
            column_width: matches.get_one("column-width").copied(),
        }
    }

    pub async fn run(self, mut session: Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing calendar view...");
        self.view.apply(&mut session)?;
        self.write_to(&session, io::stdout().lock())?;
        Ok(())
    }

    /// Renders the session's grid into `out` and flushes it.
    pub fn write_to<W: Write>(&self, session: &Session, out: W) -> io::Result<W> {
        let mut surface = TextSurface::new(out);
        if let Some(width) = self.column_width {
            surface = surface.with_column_width(width);
        }
        surface.render_grid(&session.grid())?;

        let mut out = surface.into_inner();
        out.flush()?;
        Ok(out)
    }
}
