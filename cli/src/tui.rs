// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod calendar_pane;
mod calendar_store;
mod component;
mod component_form;
mod component_page;
mod confirm;
mod dispatcher;
mod event_editor;

pub use app::run_calendar;
