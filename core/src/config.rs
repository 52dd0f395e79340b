// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use chrono::TimeDelta;
use serde::de;

use crate::{
    DEFAULT_NARROW_THRESHOLD, EventDraft, EventId, MAX_AGENDA_DAYS, Preset, RangePolicy,
    SurfaceOptions, ViewKind,
};

/// The name of the application.
pub const APP_NAME: &str = "slotcal";

/// Configuration of a calendar session.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which bundle of views, rules and seed events to start from.
    pub preset: Preset,

    /// View shown on start, instead of the preset's.
    pub default_view: Option<ViewKind>,

    /// Widths at or below this use the narrow layout.
    pub narrow_threshold: Option<u32>,

    /// Length of one time-grid row, instead of the preset's.
    pub slot_duration: Option<ConfigDuration>,

    /// Days shown by the agenda view, instead of the preset's.
    pub agenda_days: Option<u32>,

    /// How the store validates event ranges.
    pub range_policy: RangePolicy,

    /// Events to start with. When present they replace the preset's.
    pub events: Vec<EventSeed>,
}

impl Config {
    /// A default configuration for the given preset.
    pub fn with_preset(preset: Preset) -> Self {
        Self {
            preset,
            ..Default::default()
        }
    }

    /// The view to open, falling back to the preset's default.
    pub fn initial_view(&self) -> ViewKind {
        self.default_view
            .unwrap_or_else(|| self.preset.default_view())
    }

    pub fn narrow_threshold(&self) -> u32 {
        self.narrow_threshold.unwrap_or(DEFAULT_NARROW_THRESHOLD)
    }

    /// Days shown by the agenda view, at most [`MAX_AGENDA_DAYS`].
    pub fn agenda_days(&self) -> u32 {
        self.agenda_days
            .unwrap_or_else(|| self.preset.agenda_days())
            .clamp(1, MAX_AGENDA_DAYS)
    }

    /// The preset's surface options with configured overrides applied.
    pub fn surface_options(&self) -> SurfaceOptions {
        let mut options = self.preset.options();
        if let Some(ConfigDuration(d)) = self.slot_duration {
            options.slot_duration = d;
        }
        options
    }
}

/// An event listed in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct EventSeed {
    /// Fixed identifier; a fresh one is generated when absent.
    #[serde(default)]
    pub id: Option<EventId>,

    #[serde(flatten)]
    pub draft: EventDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDuration(pub TimeDelta);

impl<'de> serde::Deserialize<'de> for ConfigDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = ConfigDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str(r#"a duration string like "HH:MM", "1h", "15m", or "900s""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match parse_duration(value) {
                    Ok(d) if d > TimeDelta::days(1) => {
                        Err(de::Error::custom("duration must not exceed one day"))
                    }
                    Ok(d) if d > TimeDelta::zero() => Ok(ConfigDuration(d)),
                    Ok(_) => Err(de::Error::custom("duration must be positive")),
                    Err(e) => Err(de::Error::custom(e.to_string())),
                }
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

/// Parse a duration string in the format "HH:MM" / "1d" / "24h" / "60m" / "1800s".
fn parse_duration(s: &str) -> Result<TimeDelta, Box<dyn Error>> {
    let out_of_range = || format!("Duration out of range: {s}");

    // Try to parse "HH:MM" format
    if let Some((h, m)) = s.split_once(':') {
        let hours: i64 = h.trim().parse()?;
        let minutes: i64 = m.trim().parse()?;
        hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .and_then(TimeDelta::try_minutes)
            .ok_or_else(|| out_of_range().into())
    }
    // Match suffix-based formats
    else if let Some(rest) = s.strip_suffix("d") {
        let days: i64 = rest.trim().parse()?;
        TimeDelta::try_days(days).ok_or_else(|| out_of_range().into())
    } else if let Some(rest) = s.strip_suffix("h") {
        let hours: i64 = rest.trim().parse()?;
        TimeDelta::try_hours(hours).ok_or_else(|| out_of_range().into())
    } else if let Some(rest) = s.strip_suffix("m") {
        let minutes: i64 = rest.trim().parse()?;
        TimeDelta::try_minutes(minutes).ok_or_else(|| out_of_range().into())
    } else if let Some(rest) = s.strip_suffix("s") {
        let seconds: i64 = rest.trim().parse()?;
        TimeDelta::try_seconds(seconds).ok_or_else(|| out_of_range().into())
    } else {
        Err(format!("Invalid duration format: {s}").into())
    }
}
