mod state;
mod value;

pub use state::{PanelState, SelectState};
pub use value::SelectValue;

use crate::element::Element;
use crate::text::display_width;
use crate::types::{Border, Color, Edges, Position, Size, Style, TextWrap};

const TRIGGER_HEIGHT: u16 = 3;
const PANEL_Z: i16 = 100;

const ACCENT: Color = Color::oklch(0.55, 0.16, 250.0);
const BORDER_IDLE: Color = Color::oklch(0.45, 0.02, 250.0);
const PANEL_BG: Color = Color::oklch(0.22, 0.015, 250.0);
const ARROW_FG: Color = Color::oklch(0.65, 0.02, 250.0);

/// Dropdown selection widget: a bordered trigger showing the current value
/// and, while open, an option panel floated directly beneath it.
///
/// The widget is presentational. It owns no selection; the host keeps a
/// [`SelectValue`] and applies the [`Event::Change`](crate::Event::Change)
/// events that [`SelectState::process_events`] emits. Per-frame, the host
/// calls [`Select::build`] with the state and value and places the returned
/// element in its tree.
///
/// Single-select replaces the value on every pick and closes; multi-select
/// accumulates entries (kept in option-list order) and stays open. The
/// first panel row is an affordance: "None" to clear in single mode, "All"
/// to select or clear everything in multi mode.
pub struct Select {
    id: String,
    options: Vec<String>,
    placeholder: String,
    multi: bool,
    width: Option<u16>,
    full_width: bool,
    max_visible: u16,
    accent: Color,
}

impl Select {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            placeholder: String::new(),
            multi: false,
            width: None,
            full_width: false,
            max_visible: 8,
            accent: ACCENT,
        }
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Text shown on the trigger while nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn multi_select(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Fixed trigger width in cells. Without this the trigger sizes to its
    /// current display text.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Stretch the trigger (and panel) to the parent's width.
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Rows shown at once before the panel becomes a scroll window.
    pub fn max_visible(mut self, max_visible: u16) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Highlight color for the open trigger border and selected rows.
    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    pub fn panel_id(&self) -> String {
        format!("{}-panel", self.id)
    }

    pub fn option_id(&self, index: usize) -> String {
        format!("{}-opt-{index}", self.id)
    }

    /// Id of the "None" affordance row (single-select panels).
    pub fn clear_item_id(&self) -> String {
        format!("{}-opt-clear", self.id)
    }

    /// Id of the "All" affordance row (multi-select panels).
    pub fn all_item_id(&self) -> String {
        format!("{}-opt-all", self.id)
    }

    pub fn label_id(&self) -> String {
        format!("{}-label", self.id)
    }

    pub fn arrow_id(&self) -> String {
        format!("{}-arrow", self.id)
    }

    /// Option index encoded in a row id, `None` for everything else
    /// (including the affordance rows).
    pub(crate) fn item_index(&self, target: &str) -> Option<usize> {
        target
            .strip_prefix(self.id.as_str())?
            .strip_prefix("-opt-")?
            .parse()
            .ok()
    }

    /// Panel row ids in display order, affordance row first.
    pub(crate) fn row_ids(&self) -> Vec<String> {
        let mut ids = Vec::with_capacity(self.options.len() + 1);
        ids.push(if self.multi {
            self.all_item_id()
        } else {
            self.clear_item_id()
        });
        ids.extend((0..self.options.len()).map(|i| self.option_id(i)));
        ids
    }

    fn row_count(&self) -> u16 {
        (self.options.len() + 1).min(u16::MAX as usize) as u16
    }

    fn visible_rows(&self) -> u16 {
        self.max_visible.max(1).min(self.row_count())
    }

    pub(crate) fn max_scroll(&self) -> u16 {
        self.row_count() - self.visible_rows()
    }

    /// Build this frame's element subtree.
    ///
    /// The subtree's own footprint is always just the trigger; the panel is
    /// an absolute child floated beneath it, so surrounding flow layout does
    /// not move when the panel opens.
    pub fn build(&self, state: &SelectState, value: &SelectValue) -> Element {
        let open = state.is_open();
        let display = value.display_text(&self.placeholder);

        let width = match (self.width, self.full_width) {
            (Some(w), _) => Size::Fixed(w),
            (None, true) => Size::Fill,
            (None, false) => Size::Fixed(self.trigger_width_hint(&display)),
        };

        let mut root = Element::col()
            .id(self.id.clone())
            .width(width)
            .height(Size::Fixed(TRIGGER_HEIGHT))
            .child(self.build_trigger(open, value, &display));

        if open {
            root = root.child(self.build_panel(state, value, width));
        }
        root
    }

    fn build_trigger(&self, open: bool, value: &SelectValue, display: &str) -> Element {
        let border_color = if open { self.accent } else { BORDER_IDLE };
        let arrow = if open { "▼" } else { "▲" };

        let mut label_style = Style::new();
        if value.is_empty() {
            label_style = label_style.dim();
        }

        Element::row()
            .id(self.trigger_id())
            .width(Size::Fill)
            .height(Size::Fixed(TRIGGER_HEIGHT))
            .padding(Edges::symmetric(0, 1))
            .gap(1)
            .clickable(true)
            .style(Style::new().border(Border::Rounded).foreground(border_color))
            .child(
                Element::text(display)
                    .id(self.label_id())
                    .width(Size::Fill)
                    .height(Size::Fixed(1))
                    .text_wrap(TextWrap::Truncate)
                    .style(label_style),
            )
            .child(
                Element::text(arrow)
                    .id(self.arrow_id())
                    .width(Size::Fixed(1))
                    .height(Size::Fixed(1))
                    .style(Style::new().foreground(ARROW_FG)),
            )
    }

    fn build_panel(&self, state: &SelectState, value: &SelectValue, trigger_width: Size) -> Element {
        let visible = self.visible_rows();
        let scroll = state.scroll().min(self.max_scroll()) as usize;

        let mut panel = Element::col()
            .id(self.panel_id())
            .position(Position::Absolute)
            .left(0)
            .top(TRIGGER_HEIGHT as i16)
            .z_index(PANEL_Z)
            .height(Size::Fixed(visible + 2))
            .clickable(true)
            .style(
                Style::new()
                    .background(PANEL_BG)
                    .foreground(BORDER_IDLE)
                    .border(Border::Rounded),
            );

        // The panel hugs its widest row but never shrinks below the trigger.
        panel = match trigger_width {
            Size::Fixed(w) => panel.width(Size::Auto).min_width(w),
            _ => panel.width(Size::Fill),
        };

        let end = (scroll + visible as usize).min(self.row_count() as usize);
        panel.children((scroll..end).map(|row| self.build_row(row, state, value)))
    }

    fn build_row(&self, row: usize, state: &SelectState, value: &SelectValue) -> Element {
        let (id, label, selected, affordance) = if row == 0 {
            if self.multi {
                let selected = value.all_selected(&self.options);
                (
                    self.all_item_id(),
                    format!("{} All", check_mark(selected)),
                    selected,
                    true,
                )
            } else {
                (
                    self.clear_item_id(),
                    "None".to_string(),
                    value.is_empty(),
                    true,
                )
            }
        } else {
            let option = &self.options[row - 1];
            let selected = value.is_selected(option);
            let label = if self.multi {
                format!("{} {}", check_mark(selected), option)
            } else {
                option.clone()
            };
            (self.option_id(row - 1), label, selected, false)
        };

        let hovered = state.hovered() == Some(id.as_str());
        let mut style = Style::new();
        if hovered {
            style = style.background(PANEL_BG.lighten(0.16));
        } else if selected {
            style = style.background(self.accent.darken(0.25));
        }
        if affordance {
            style = style.italic();
        }

        Element::text(label)
            .id(id)
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::symmetric(0, 1))
            .text_wrap(TextWrap::Truncate)
            .clickable(true)
            .style(style)
    }

    fn trigger_width_hint(&self, display: &str) -> u16 {
        // Label, then gap and arrow, inside padding and border.
        (display_width(display).min(u16::MAX as usize) as u16).saturating_add(6)
    }
}

fn check_mark(selected: bool) -> char {
    if selected {
        '☑'
    } else {
        '☐'
    }
}
