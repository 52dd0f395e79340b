// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the slotcal-core crate.
//!
//! These tests drive a session the way a calendar surface would: selecting
//! slots, clicking, dragging, resizing and reporting viewport widths.

mod config_driven;
mod crud_loop;
mod editor_flow;
mod persian_week;
mod responsive;
