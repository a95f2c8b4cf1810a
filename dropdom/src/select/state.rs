use crate::event::{Event, MouseButton};
use crate::hit::region_contains;
use crate::layout::LayoutResult;
use crate::select::{Select, SelectValue};

/// Whether the option panel is on screen. There is no third state: the
/// panel is either fully absent from the tree or fully present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }
}

/// Per-instance interaction state: panel visibility, scroll window offset
/// and the hovered row. The selection itself lives with the host as a
/// [`SelectValue`].
#[derive(Debug, Clone, Default)]
pub struct SelectState {
    panel: PanelState,
    scroll: u16,
    hovered: Option<String>,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// First visible row of the option panel.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Show the panel, with the scroll window back at the top.
    pub fn open(&mut self) {
        self.panel = PanelState::Open;
        self.scroll = 0;
        self.hovered = None;
    }

    pub fn close(&mut self) {
        self.panel = PanelState::Closed;
        self.hovered = None;
    }

    /// Route one frame's events through this instance.
    ///
    /// Every event is passed through untouched so that other widgets see
    /// the same stream; presses are observed, never consumed, which is what
    /// lets each open instance decide its own dismissal. Activating a row
    /// appends a [`Event::Change`] carrying the serialized next value right
    /// after the press that caused it.
    pub fn process_events(
        &mut self,
        select: &Select,
        value: &SelectValue,
        events: &[Event],
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut out = Vec::with_capacity(events.len());
        for event in events {
            match event {
                Event::Click {
                    target,
                    x,
                    y,
                    button,
                } => {
                    out.push(event.clone());
                    if let Some(change) =
                        self.handle_press(select, value, target.as_deref(), *x, *y, *button, layout)
                    {
                        out.push(change);
                    }
                }
                Event::MouseMove { x, y } => {
                    if self.is_open() {
                        self.track_hover(select, *x, *y, layout);
                    }
                    out.push(event.clone());
                }
                Event::Scroll { x, y, delta } => {
                    if self.is_open() && region_contains(layout, &select.panel_id(), *x, *y) {
                        self.scroll_by(*delta, select.max_scroll());
                    }
                    out.push(event.clone());
                }
                other => out.push(other.clone()),
            }
        }
        out
    }

    fn handle_press(
        &mut self,
        select: &Select,
        value: &SelectValue,
        target: Option<&str>,
        x: u16,
        y: u16,
        button: MouseButton,
        layout: &LayoutResult,
    ) -> Option<Event> {
        if button == MouseButton::Left {
            if target == Some(select.trigger_id().as_str()) {
                match self.panel {
                    PanelState::Closed => {
                        log::debug!("select {:?}: trigger pressed, opening", select.id());
                        self.open();
                    }
                    PanelState::Open => {
                        log::debug!("select {:?}: trigger pressed, closing", select.id());
                        self.close();
                    }
                }
                return None;
            }
            if self.is_open() {
                if let Some(target) = target {
                    if let Some(change) = self.activate(select, value, target) {
                        return Some(change);
                    }
                }
            }
        }

        // A press anywhere outside the trigger and the panel dismisses,
        // regardless of button or of what it hit.
        if self.is_open()
            && !region_contains(layout, &select.trigger_id(), x, y)
            && !region_contains(layout, &select.panel_id(), x, y)
        {
            log::debug!(
                "select {:?}: outside press at ({x}, {y}), closing",
                select.id()
            );
            self.close();
        }
        None
    }

    /// Resolve a press on one of our rows into the next value.
    fn activate(&mut self, select: &Select, value: &SelectValue, target: &str) -> Option<Event> {
        let next = if select.is_multi() && target == select.all_item_id() {
            value.toggle_all(&select.options)
        } else if !select.is_multi() && target == select.clear_item_id() {
            value.toggle("", &select.options)
        } else if let Some(index) = select.item_index(target) {
            let option = select.options.get(index)?;
            value.toggle(option, &select.options)
        } else {
            return None;
        };

        if !select.is_multi() {
            self.close();
        }
        let serialized = next.to_joined();
        log::debug!("select {:?}: value changed to {serialized:?}", select.id());
        Some(Event::Change {
            target: select.id().to_string(),
            value: serialized,
        })
    }

    fn track_hover(&mut self, select: &Select, x: u16, y: u16, layout: &LayoutResult) {
        let hovered = select
            .row_ids()
            .into_iter()
            .find(|id| region_contains(layout, id, x, y));
        if hovered != self.hovered {
            log::trace!("select {:?}: hover {hovered:?}", select.id());
            self.hovered = hovered;
        }
    }

    fn scroll_by(&mut self, delta: i16, max: u16) {
        let next = (self.scroll as i32 + delta as i32).clamp(0, max as i32) as u16;
        if next != self.scroll {
            log::trace!("scroll window moved to {next}");
            self.scroll = next;
        }
    }
}
