// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{EditorVariant, ViewKind};

/// Widths at or below this are narrow.
pub const DEFAULT_NARROW_THRESHOLD: u32 = 768;

/// Presentation mode derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Small screens: slide-up panel editor, one day at a time.
    Narrow,

    /// Large screens: dialog editor, one week at a time.
    Wide,
}

impl DisplayMode {
    /// Classifies a width against a threshold.
    pub fn from_width(width: u32, threshold: u32) -> Self {
        if width <= threshold {
            DisplayMode::Narrow
        } else {
            DisplayMode::Wide
        }
    }

    /// Which editor variant this mode shows.
    pub fn editor_variant(self) -> EditorVariant {
        match self {
            DisplayMode::Narrow => EditorVariant::Panel,
            DisplayMode::Wide => EditorVariant::Dialog,
        }
    }

    /// Default grid granularity for this mode.
    pub fn granularity(self) -> ViewKind {
        match self {
            DisplayMode::Narrow => ViewKind::Day,
            DisplayMode::Wide => ViewKind::Week,
        }
    }
}

/// Tracks the display mode from injected width notifications.
///
/// There is no debouncing and no hysteresis: every notification is compared
/// against the threshold and a change is reported once per crossing.
#[derive(Debug, Clone)]
pub struct ResponsiveSwitch {
    threshold: u32,
    mode: DisplayMode,
}

impl Default for ResponsiveSwitch {
    fn default() -> Self {
        Self::with_mode(DEFAULT_NARROW_THRESHOLD, DisplayMode::Wide)
    }
}

impl ResponsiveSwitch {
    /// Creates a switch classifying the initial width.
    pub fn new(threshold: u32, width: u32) -> Self {
        Self::with_mode(threshold, DisplayMode::from_width(width, threshold))
    }

    /// Creates a switch in a known mode.
    pub fn with_mode(threshold: u32, mode: DisplayMode) -> Self {
        Self { threshold, mode }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Records a new width, returning the new mode if it crossed the threshold.
    pub fn observe(&mut self, width: u32) -> Option<DisplayMode> {
        self.set_mode(DisplayMode::from_width(width, self.threshold))
    }

    /// Forces a mode, returning it if it differs from the current one.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Option<DisplayMode> {
        if mode == self.mode {
            return None;
        }

        tracing::debug!(from = ?self.mode, to = ?mode, "display mode changed");
        self.mode = mode;
        Some(mode)
    }
}
