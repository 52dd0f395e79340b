// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fields of the entry editor.
//!
//! A field keeps no value of its own. It reads through an [`Access`] and writes
//! back by dispatching an action, so the editor form in the store stays the
//! only copy.

use std::{cell::RefCell, marker::PhantomData};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::byte_range_of_grapheme_at;

/// Rows taken by a field: label, value, and a rail row.
const FIELD_HEIGHT: u16 = 3;
const GUTTER_WIDTH: u16 = 2;

const MARK_FOCUSED: &str = "◆";
const MARK_IDLE: &str = "◇";
const RAIL: &str = "│";
const RAIL_END: &str = "└";

/// Reads and writes one value of the store.
pub trait Access<S, T> {
    fn get(store: &RefCell<S>) -> T;

    /// Dispatches the new value, returning whether it was sent.
    fn set(dispatcher: &mut Dispatcher, value: T) -> bool;

    /// Whether the field is shown for the current state of the store.
    fn shown(_store: &RefCell<S>) -> bool {
        true
    }

    /// Whether `c` may be typed into the current text.
    fn accepts(_current: &str, _c: char) -> bool {
        true
    }

    /// Whether the value is complete; incomplete values are drawn in red.
    fn is_valid(_value: &T) -> bool {
        true
    }
}

/// One row of the form.
pub trait Field<S>: Component<S> {
    fn label(&self) -> &str;
    fn shown(&self, store: &RefCell<S>) -> bool;
    fn is_focused(&self) -> bool;
}

/// A vertical list of fields with one of them focused.
pub struct Form<S> {
    fields: Vec<Box<dyn Field<S>>>,
    focus: usize,
}

impl<S> Form<S> {
    pub fn new(fields: Vec<Box<dyn Field<S>>>) -> Self {
        Self { fields, focus: 0 }
    }

    /// The area of every field, `None` for hidden ones and those that do not fit.
    fn areas(&self, store: &RefCell<S>, area: Rect) -> Vec<Option<Rect>> {
        let inner = area.inner(Margin::new(1, 1));
        let mut y = inner.y;
        self.fields
            .iter()
            .map(|field| {
                if !field.shown(store) || y >= inner.bottom() {
                    return None;
                }
                let height = FIELD_HEIGHT.min(inner.bottom() - y);
                let rect = Rect::new(inner.x, y, inner.width, height);
                y += height;
                Some(rect)
            })
            .collect()
    }

    /// Moves focus to the next shown field, wrapping around.
    fn step(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, forward: bool) {
        let len = self.fields.len();
        let next = (1..len)
            .map(|i| match forward {
                true => (self.focus + i) % len,
                false => (self.focus + len - i) % len,
            })
            .find(|&i| self.fields[i].shown(store));

        if let Some(next) = next {
            self.fields[self.focus].deactivate(dispatcher, store);
            self.focus = next;
            self.fields[self.focus].activate(dispatcher, store);
        }
    }
}

impl<S> Component<S> for Form<S> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.areas(store, area);
        let last = areas.iter().rposition(Option::is_some);
        for (i, (field, rect)) in self.fields.iter().zip(&areas).enumerate() {
            if let Some(rect) = rect {
                draw_gutter(field.label(), field.is_focused(), last == Some(i), *rect, buf);
                field.render(store, body(*rect), buf);
            }
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let rect = self.areas(store, area).get(self.focus).copied().flatten()?;
        self.fields
            .get(self.focus)?
            .get_cursor_position(store, body(rect))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let rect = self.areas(store, area).get(self.focus).copied().flatten();
        if let (Some(field), Some(rect)) = (self.fields.get_mut(self.focus), rect)
            && let Some(msg) = field.on_key(dispatcher, store, body(rect), event)
        {
            return Some(msg);
        }

        match event.code {
            KeyCode::Tab | KeyCode::Down => self.step(dispatcher, store, true),
            KeyCode::BackTab | KeyCode::Up => self.step(dispatcher, store, false),
            KeyCode::Enter => {
                dispatcher.dispatch(Action::SubmitEditor);
                return Some(Message::Handled);
            }
            _ => return None,
        }
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.deactivate(dispatcher, store);
        }
    }
}

/// A single line of text.
pub struct Input<S, A> {
    label: String,
    focused: bool,

    /// Cursor position in graphemes.
    cursor: usize,
    _access: PhantomData<(S, A)>,
}

impl<S, A: Access<S, String>> Input<S, A> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            focused: false,
            cursor: 0,
            _access: PhantomData,
        }
    }

    fn edit(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, code: KeyCode) {
        let mut value = A::get(store);
        let len = value.graphemes(true).count();
        match code {
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(len),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len,
            KeyCode::Backspace if self.cursor > 0 => {
                if let Some(range) = byte_range_of_grapheme_at(&value, self.cursor - 1) {
                    value.replace_range(range, "");
                    if A::set(dispatcher, value) {
                        self.cursor -= 1;
                    }
                }
            }
            KeyCode::Delete => {
                if let Some(range) = byte_range_of_grapheme_at(&value, self.cursor) {
                    value.replace_range(range, "");
                    A::set(dispatcher, value);
                }
            }
            KeyCode::Char(c) if A::accepts(&value, c) => {
                let at = value
                    .grapheme_indices(true)
                    .nth(self.cursor)
                    .map_or(value.len(), |(i, _)| i);
                value.insert(at, c);
                if A::set(dispatcher, value) {
                    self.cursor += 1;
                }
            }
            _ => {}
        }
    }
}

impl<S, A: Access<S, String>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let value = A::get(store);
        let style = match A::is_valid(&value) {
            true => Style::new(),
            false => Style::new().red(),
        };
        buf.set_stringn(area.x, area.y, &value, area.width as usize, style);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.focused {
            return None;
        }
        let value = A::get(store);
        let width: usize = value.graphemes(true).take(self.cursor).map(|g| g.width()).sum();
        let x = area.x.saturating_add(width as u16).min(area.right());
        Some((x, area.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        let editing = matches!(
            event.code,
            Left | Right | Home | End | Backspace | Delete | Char(_)
        );
        if !self.focused || !editing {
            return None;
        }
        self.edit(dispatcher, store, event.code);
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.focused = true;
        self.cursor = A::get(store).graphemes(true).count();
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.focused = false;
        self.cursor = 0;
    }
}

impl<S, A: Access<S, String>> Field<S> for Input<S, A> {
    fn label(&self) -> &str {
        &self.label
    }

    fn shown(&self, store: &RefCell<S>) -> bool {
        A::shown(store)
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

/// One value out of a fixed set, cycled with the arrow keys or space.
pub struct Choice<S, T, A> {
    label: String,
    options: Vec<(T, String)>,
    focused: bool,
    _access: PhantomData<(S, A)>,
}

impl<S, T: PartialEq + Clone, A: Access<S, T>> Choice<S, T, A> {
    pub fn new(label: impl Into<String>, options: Vec<(T, String)>) -> Self {
        Self {
            label: label.into(),
            options,
            focused: false,
            _access: PhantomData,
        }
    }

    fn selected(&self, store: &RefCell<S>) -> usize {
        let value = A::get(store);
        self.options.iter().position(|(v, _)| v == &value).unwrap_or(0)
    }

    /// Left edge of every option, as `[x] name` entries two columns apart.
    fn offsets(&self) -> impl Iterator<Item = u16> + '_ {
        self.options.iter().scan(0u16, |x, (_, name)| {
            let at = *x;
            *x = x.saturating_add(name.width() as u16 + 6);
            Some(at)
        })
    }
}

impl<S, T: PartialEq + Clone, A: Access<S, T>> Component<S> for Choice<S, T, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let selected = self.selected(store);
        for (i, ((_, name), x)) in self.options.iter().zip(self.offsets()).enumerate() {
            if x >= area.width {
                break;
            }
            let mark = if i == selected { 'x' } else { ' ' };
            let text = format!("[{mark}] {name}");
            buf.set_stringn(area.x + x, area.y, text, (area.width - x) as usize, Style::new());
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.focused {
            return None;
        }
        let x = self.offsets().nth(self.selected(store))?;
        Some((area.x.saturating_add(x + 1).min(area.right()), area.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let len = self.options.len();
        if !self.focused || len == 0 {
            return None;
        }

        let index = match event.code {
            KeyCode::Left => (self.selected(store) + len - 1) % len,
            KeyCode::Right | KeyCode::Char(' ') => (self.selected(store) + 1) % len,
            _ => return None,
        };
        if let Some((value, _)) = self.options.get(index) {
            A::set(dispatcher, value.clone());
        }
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.focused = true;
    }

    fn deactivate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.focused = false;
    }
}

impl<S, T: PartialEq + Clone, A: Access<S, T>> Field<S> for Choice<S, T, A> {
    fn label(&self) -> &str {
        &self.label
    }

    fn shown(&self, store: &RefCell<S>) -> bool {
        A::shown(store)
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Draws the marker, the label and the rail down the left of a field.
fn draw_gutter(label: &str, focused: bool, last: bool, area: Rect, buf: &mut Buffer) {
    let (mark, style) = match focused {
        true => (MARK_FOCUSED, Style::new().blue()),
        false => (MARK_IDLE, Style::new().gray()),
    };
    buf.set_string(area.x, area.y, mark, style);

    let width = area.width.saturating_sub(GUTTER_WIDTH) as usize;
    buf.set_stringn(area.x + GUTTER_WIDTH, area.y, label, width, style.bold());

    for y in area.y + 1..area.bottom() {
        let rail = if last && y + 1 == area.bottom() { RAIL_END } else { RAIL };
        buf.set_string(area.x, y, rail, style);
    }
}

/// Where the value of a field goes: right of the gutter, below the label.
fn body(area: Rect) -> Rect {
    Rect {
        x: area.x + GUTTER_WIDTH,
        y: area.y + 1,
        width: area.width.saturating_sub(GUTTER_WIDTH),
        height: area.height.saturating_sub(2).max(1),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use ratatui::crossterm::event::KeyModifiers;

    use super::*;

    #[derive(Default)]
    struct Draft {
        name: String,
        code: String,
        flag: bool,
        submitted: u32,
    }

    struct NameAccess;

    impl Access<Draft, String> for NameAccess {
        fn get(store: &RefCell<Draft>) -> String {
            store.borrow().name.clone()
        }

        fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
            dispatcher.dispatch(Action::UpdateTitle(value));
            true
        }
    }

    /// Four digits, shown only while the flag is off.
    struct CodeAccess;

    impl Access<Draft, String> for CodeAccess {
        fn get(store: &RefCell<Draft>) -> String {
            store.borrow().code.clone()
        }

        fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
            dispatcher.dispatch(Action::UpdateLocation(value));
            true
        }

        fn shown(store: &RefCell<Draft>) -> bool {
            !store.borrow().flag
        }

        fn accepts(current: &str, c: char) -> bool {
            c.is_ascii_digit() && current.len() < 4
        }

        fn is_valid(value: &String) -> bool {
            value.len() == 4
        }
    }

    struct FlagAccess;

    impl Access<Draft, bool> for FlagAccess {
        fn get(store: &RefCell<Draft>) -> bool {
            store.borrow().flag
        }

        fn set(dispatcher: &mut Dispatcher, value: bool) -> bool {
            dispatcher.dispatch(Action::UpdateAllDay(value));
            true
        }
    }

    fn setup() -> (Rc<RefCell<Draft>>, Dispatcher, Form<Draft>) {
        let store = Rc::new(RefCell::new(Draft::default()));
        let mut dispatcher = Dispatcher::new();
        let that = store.clone();
        dispatcher.register(Rc::new(RefCell::new(move |action: &Action| {
            let mut draft = that.borrow_mut();
            match action {
                Action::UpdateTitle(v) => draft.name = v.clone(),
                Action::UpdateLocation(v) => draft.code = v.clone(),
                Action::UpdateAllDay(v) => draft.flag = *v,
                Action::SubmitEditor => draft.submitted += 1,
                _ => {}
            }
        })));

        let mut form = Form::new(vec![
            Box::new(Input::<Draft, NameAccess>::new("Name")),
            Box::new(Choice::<Draft, bool, FlagAccess>::new(
                "Flag",
                vec![(false, "Off".to_string()), (true, "On".to_string())],
            )),
            Box::new(Input::<Draft, CodeAccess>::new("Code")),
        ]);
        form.activate(&mut dispatcher, &store);
        (store, dispatcher, form)
    }

    fn press(
        form: &mut Form<Draft>,
        dispatcher: &mut Dispatcher,
        store: &RefCell<Draft>,
        code: KeyCode,
    ) -> Option<Message> {
        let area = Rect::new(0, 0, 40, 12);
        form.on_key(dispatcher, store, area, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn draw(form: &Form<Draft>, store: &RefCell<Draft>) -> Buffer {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        form.render(store, area, &mut buf);
        buf
    }

    #[test]
    fn test_typing_edits_at_the_cursor() {
        let (store, mut dispatcher, mut form) = setup();

        for c in "café".chars() {
            press(&mut form, &mut dispatcher, &store, KeyCode::Char(c));
        }
        press(&mut form, &mut dispatcher, &store, KeyCode::Backspace);
        press(&mut form, &mut dispatcher, &store, KeyCode::Home);
        press(&mut form, &mut dispatcher, &store, KeyCode::Delete);
        press(&mut form, &mut dispatcher, &store, KeyCode::Char('h'));
        assert_eq!(store.borrow().name, "haf");

        let area = Rect::new(0, 0, 40, 12);
        // margin 1, gutter 2, one grapheme typed
        assert_eq!(form.get_cursor_position(&store, area), Some((4, 2)));
    }

    #[test]
    fn test_input_filters_characters() {
        let (store, mut dispatcher, mut form) = setup();
        press(&mut form, &mut dispatcher, &store, KeyCode::Tab);
        press(&mut form, &mut dispatcher, &store, KeyCode::Tab);

        for c in "1a2-345".chars() {
            press(&mut form, &mut dispatcher, &store, KeyCode::Char(c));
        }
        assert_eq!(store.borrow().code, "1234");
    }

    #[test]
    fn test_invalid_value_is_red() {
        let (store, _dispatcher, form) = setup();
        store.borrow_mut().code = "12".to_string();

        let buf = draw(&form, &store);
        // third field: margin 1, two fields above, label row
        assert_eq!(buf[(3, 8)].symbol(), "1");
        assert_eq!(buf[(3, 8)].fg, Color::Red);
        assert_ne!(buf[(3, 2)].fg, Color::Red);
    }

    #[test]
    fn test_hidden_field_is_skipped() {
        let (store, mut dispatcher, mut form) = setup();
        press(&mut form, &mut dispatcher, &store, KeyCode::Tab);
        press(&mut form, &mut dispatcher, &store, KeyCode::Char(' '));
        assert!(store.borrow().flag);
        assert!(!draw(&form, &store).content.iter().any(|c| c.symbol() == "C"));

        let msg = press(&mut form, &mut dispatcher, &store, KeyCode::Tab);
        assert_eq!(msg, Some(Message::CursorUpdated));
        press(&mut form, &mut dispatcher, &store, KeyCode::Char('x'));
        assert_eq!(store.borrow().name, "x");
        assert_eq!(store.borrow().code, "");
    }

    #[test]
    fn test_back_tab_wraps_to_last_field() {
        let (store, mut dispatcher, mut form) = setup();
        press(&mut form, &mut dispatcher, &store, KeyCode::BackTab);
        press(&mut form, &mut dispatcher, &store, KeyCode::Char('7'));
        assert_eq!(store.borrow().code, "7");
    }

    #[test]
    fn test_choice_cycles_both_ways() {
        let (store, mut dispatcher, mut form) = setup();
        press(&mut form, &mut dispatcher, &store, KeyCode::Tab);

        press(&mut form, &mut dispatcher, &store, KeyCode::Left);
        assert!(store.borrow().flag);
        press(&mut form, &mut dispatcher, &store, KeyCode::Right);
        assert!(!store.borrow().flag);

        let text: String = draw(&form, &store).content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("[x] Off  [ ] On"));
    }

    #[test]
    fn test_enter_submits() {
        let (store, mut dispatcher, mut form) = setup();
        let msg = press(&mut form, &mut dispatcher, &store, KeyCode::Enter);
        assert_eq!(msg, Some(Message::Handled));
        assert_eq!(store.borrow().submitted, 1);
    }

    #[test]
    fn test_last_shown_field_ends_the_rail() {
        let (store, _dispatcher, form) = setup();
        let buf = draw(&form, &store);
        assert_eq!(buf[(1, 1)].symbol(), MARK_FOCUSED);
        assert_eq!(buf[(1, 3)].symbol(), RAIL);
        assert_eq!(buf[(1, 9)].symbol(), RAIL_END);
    }
}
