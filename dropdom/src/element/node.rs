use std::sync::atomic::{AtomicU64, Ordering};

use crate::element::Content;
use crate::types::{Align, Direction, Edges, Justify, Position, Size, Style, TextAlign, TextWrap};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id() -> String {
    format!("el-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// One node of the view tree. Built once per frame with the builder methods,
/// then handed to layout and render.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,
    pub width: Size,
    pub height: Size,
    pub min_width: Option<u16>,
    pub padding: Edges,
    pub position: Position,
    pub left: Option<i16>,
    pub top: Option<i16>,
    pub z_index: i16,
    pub direction: Direction,
    pub gap: u16,
    pub justify: Justify,
    pub align: Align,
    pub style: Style,
    pub text_wrap: TextWrap,
    pub text_align: TextAlign,
    pub clickable: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id(),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            min_width: None,
            padding: Edges::default(),
            position: Position::Static,
            left: None,
            top: None,
            z_index: 0,
            direction: Direction::Column,
            gap: 0,
            justify: Justify::Start,
            align: Align::Start,
            style: Style::default(),
            text_wrap: TextWrap::NoWrap,
            text_align: TextAlign::Left,
            clickable: false,
        }
    }
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::default()
        }
    }

    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Self::default()
        }
    }

    pub fn col() -> Self {
        Self {
            direction: Direction::Column,
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text_wrap(mut self, text_wrap: TextWrap) -> Self {
        self.text_wrap = text_wrap;
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Append one child, converting the content to `Children` if needed.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }
}
