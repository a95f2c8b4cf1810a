use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton as CrosstermButton,
    MouseEventKind,
};

use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// High-level input event. Raw terminal events are translated into these
/// once per frame; widgets may append their own (`Change`) while routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key {
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse press. `target` is the topmost clickable element under the
    /// pointer, or `None` when the press landed on inert space.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    MouseMove {
        x: u16,
        y: u16,
    },
    /// Wheel movement; positive `delta` scrolls content down.
    Scroll {
        x: u16,
        y: u16,
        delta: i16,
    },
    Resize {
        width: u16,
        height: u16,
    },
    /// Emitted by a widget when the host-owned value should change. `value`
    /// carries the serialized next value.
    Change {
        target: String,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    Null,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Null,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const fn none() -> Self {
        Self {
            shift: false,
            ctrl: false,
            alt: false,
        }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(modifiers: KeyModifiers) -> Self {
        Self {
            shift: modifiers.contains(KeyModifiers::SHIFT),
            ctrl: modifiers.contains(KeyModifiers::CONTROL),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<CrosstermButton> for MouseButton {
    fn from(button: CrosstermButton) -> Self {
        match button {
            CrosstermButton::Left => MouseButton::Left,
            CrosstermButton::Right => MouseButton::Right,
            CrosstermButton::Middle => MouseButton::Middle,
        }
    }
}

/// Translate a batch of raw terminal events against the current frame.
///
/// Every press becomes a `Click` carrying its resolved target; presses are
/// never swallowed here, so every widget instance can observe them for
/// dismissal no matter which instance they were aimed at.
pub fn translate_events(
    raw: &[CrosstermEvent],
    root: &Element,
    layout: &LayoutResult,
) -> Vec<Event> {
    let mut events = Vec::with_capacity(raw.len());
    for event in raw {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                events.push(Event::Key {
                    key: key.code.into(),
                    modifiers: key.modifiers.into(),
                });
            }
            CrosstermEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => {
                        let target = hit_test(layout, root, x, y);
                        log::trace!("press at ({x}, {y}) hit {target:?}");
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::Moved => events.push(Event::MouseMove { x, y }),
                    MouseEventKind::ScrollDown => events.push(Event::Scroll { x, y, delta: 1 }),
                    MouseEventKind::ScrollUp => events.push(Event::Scroll { x, y, delta: -1 }),
                    _ => {}
                }
            }
            CrosstermEvent::Resize(width, height) => {
                events.push(Event::Resize {
                    width: *width,
                    height: *height,
                });
            }
            _ => {}
        }
    }
    events
}
