// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use slotcal_core::{CalendarEvent, Priority};

use crate::{
    table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson},
    util::{OutputFormat, format_time_range},
};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![EventColumn::Id, EventColumn::TimeRange, EventColumn::Title],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds the priority, location and description columns.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns.extend([
                EventColumn::Priority,
                EventColumn::Location,
                EventColumn::Description,
            ]);
        }
        self
    }

    pub fn format<'a>(&'a self, events: &'a [&'a CalendarEvent]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [&'a CalendarEvent],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), &self.formatter.columns, self.events)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &self.formatter.columns, self.events)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    TimeRange,
    Title,
    Priority,
    Location,
    Description,
}

impl<'e> TableColumn<&'e CalendarEvent> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id => "ID",
            EventColumn::TimeRange => "Time Range",
            EventColumn::Title => "Title",
            EventColumn::Priority => "Priority",
            EventColumn::Location => "Location",
            EventColumn::Description => "Description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &'e CalendarEvent) -> Cow<'a, str> {
        match self {
            EventColumn::Id => data.id.as_str().into(),
            EventColumn::TimeRange => format_time_range(data).into(),
            EventColumn::Title => data.title.as_str().into(),
            EventColumn::Priority => data
                .priority
                .map(|p| p.to_string())
                .unwrap_or_default()
                .into(),
            EventColumn::Location => data.location.as_deref().unwrap_or_default().into(),
            EventColumn::Description => data.description.as_deref().unwrap_or_default().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &&'e CalendarEvent) -> Option<Color> {
        match (self, data.priority) {
            (EventColumn::Title | EventColumn::Priority, Some(Priority::High)) => Some(Color::Red),
            (EventColumn::Title | EventColumn::Priority, Some(Priority::Medium)) => {
                Some(Color::Yellow)
            }
            (EventColumn::TimeRange, _) if data.all_day => Some(Color::Cyan),
            _ => None,
        }
    }
}
