// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use clap::{Arg, ArgMatches, arg, value_parser};
use slotcal_core::{CalendarError, Session, ViewKind};

use crate::util::{OutputFormat, parse_date_arg};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Arguments choosing what part of the calendar to look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewArgs {
    pub view: Option<ViewKind>,

    /// Raw date, resolved against today when applied.
    pub date: Option<String>,
}

impl ViewArgs {
    pub fn view() -> Arg {
        arg!(--view <VIEW> "Calendar view to show").value_parser(value_parser!(ViewKind))
    }

    pub fn date() -> Arg {
        arg!(--date <DATE> "Date to show (YYYY-MM-DD, today, tomorrow or yesterday)")
    }

    pub fn args() -> [Arg; 2] {
        [Self::view(), Self::date()]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            view: matches.get_one("view").copied(),
            date: matches.get_one("date").cloned(),
        }
    }

    /// Moves the session to the requested view and date.
    pub fn apply(&self, session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(date) = &self.date {
            let date: NaiveDate = parse_date_arg(date, session.now().date())?;
            session.go_to(date);
        }
        if let Some(view) = self.view {
            session.change_view(view).map_err(|e: CalendarError| {
                format!("{e}, try one of: {}", offered_views(session))
            })?;
        }
        Ok(())
    }
}

fn offered_views(session: &Session) -> String {
    session
        .preset()
        .views()
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
