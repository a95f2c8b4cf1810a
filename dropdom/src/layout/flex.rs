use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::layout::Rect;
use crate::text::display_width;
use crate::types::{Align, Direction, Edges, Justify, Position, Size};

/// Element id to computed screen rect.
pub type LayoutResult = HashMap<String, Rect>;

/// Compute the rect of every element in the tree.
///
/// Static elements flow along their parent's direction; absolute elements are
/// lifted out of flow and offset from the parent's top-left corner. Absolute
/// elements may overflow their parent (the screen clips them at paint time).
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    place_element(root, available, &mut result);
    result
}

/// Content area of an element's rect, inside its border and padding.
pub(crate) fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let rect = if element.style.border.is_some() {
        rect.padded(Edges::all(1))
    } else {
        rect
    };
    rect.padded(element.padding)
}

fn place_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let width = resolve_width(element, available.width);
    let height = resolve_height(element, available.height);
    let (x, y) = match element.position {
        Position::Static => (available.x, available.y),
        Position::Absolute => (
            offset_from(available.x, element.left),
            offset_from(available.y, element.top),
        ),
    };
    let rect = Rect::new(x, y, width, height);
    result.insert(element.id.clone(), rect);
    place_children(element, rect, result);
}

fn place_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let inner = inner_rect(element, rect);
    let flow: Vec<&Element> = children
        .iter()
        .filter(|child| child.position == Position::Static)
        .collect();
    if !flow.is_empty() {
        place_flow(element, &flow, inner, result);
    }

    for child in children.iter().filter(|c| c.position == Position::Absolute) {
        // Offsets are measured from the parent's outer corner, not its
        // content area.
        place_element(child, rect, result);
    }
}

fn place_flow(parent: &Element, flow: &[&Element], inner: Rect, result: &mut LayoutResult) {
    let (main_size, cross_size) = match parent.direction {
        Direction::Row => (inner.width, inner.height),
        Direction::Column => (inner.height, inner.width),
    };
    let gap_total = parent.gap.saturating_mul(flow.len().saturating_sub(1) as u16);

    // Pass one: fixed and content-sized children claim their main-axis cells,
    // the rest is split between Fill children.
    let mut mains = Vec::with_capacity(flow.len());
    let mut claimed = gap_total;
    let mut fill_count: u16 = 0;
    for child in flow {
        match main_size_of(child, parent.direction) {
            Some(main) => {
                claimed = claimed.saturating_add(main);
                mains.push(main);
            }
            None => {
                fill_count += 1;
                mains.push(0);
            }
        }
    }
    if fill_count > 0 {
        let remaining = main_size.saturating_sub(claimed);
        let share = remaining / fill_count;
        let mut leftover = remaining % fill_count;
        for (i, child) in flow.iter().enumerate() {
            if main_size_of(child, parent.direction).is_none() {
                let bonus = if leftover > 0 {
                    leftover -= 1;
                    1
                } else {
                    0
                };
                mains[i] = share + bonus;
            }
        }
    }

    let used: u16 = mains
        .iter()
        .fold(0u16, |acc, m| acc.saturating_add(*m))
        .saturating_add(gap_total);
    let slack = main_size.saturating_sub(used);
    let (start, between) = match parent.justify {
        Justify::Start => (0, 0),
        Justify::Center => (slack / 2, 0),
        Justify::End => (slack, 0),
        Justify::SpaceBetween => match flow.len() {
            0 | 1 => (0, 0),
            n => (0, slack / (n as u16 - 1)),
        },
    };

    // Pass two: place each child along the main axis, align on the cross axis.
    let mut cursor = start;
    for (i, child) in flow.iter().enumerate() {
        let main = mains[i].min(main_size.saturating_sub(cursor));
        let cross = cross_size_of(child, parent, cross_size);
        let cross_offset = match parent.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => cross_size.saturating_sub(cross) / 2,
            Align::End => cross_size.saturating_sub(cross),
        };
        let child_rect = match parent.direction {
            Direction::Row => Rect::new(
                inner.x.saturating_add(cursor),
                inner.y.saturating_add(cross_offset),
                main,
                cross,
            ),
            Direction::Column => Rect::new(
                inner.x.saturating_add(cross_offset),
                inner.y.saturating_add(cursor),
                cross,
                main,
            ),
        };
        result.insert(child.id.clone(), child_rect);
        place_children(child, child_rect, result);
        cursor = cursor
            .saturating_add(main)
            .saturating_add(parent.gap)
            .saturating_add(between);
    }
}

fn resolve_width(element: &Element, available: u16) -> u16 {
    let base = match element.width {
        Size::Fixed(width) => width,
        Size::Fill => available,
        Size::Auto => estimate_width(element),
    };
    let base = match element.min_width {
        Some(min) => base.max(min),
        None => base,
    };
    match element.position {
        Position::Static => base.min(available),
        Position::Absolute => base,
    }
}

fn resolve_height(element: &Element, available: u16) -> u16 {
    let base = match element.height {
        Size::Fixed(height) => height,
        Size::Fill => available,
        Size::Auto => estimate_height(element),
    };
    match element.position {
        Position::Static => base.min(available),
        Position::Absolute => base,
    }
}

fn offset_from(base: u16, offset: Option<i16>) -> u16 {
    (base as i32 + offset.unwrap_or(0) as i32).clamp(0, u16::MAX as i32) as u16
}

/// Main-axis size of a flow child, `None` for Fill children.
fn main_size_of(child: &Element, direction: Direction) -> Option<u16> {
    let size = match direction {
        Direction::Row => child.width,
        Direction::Column => child.height,
    };
    match size {
        Size::Fixed(n) => Some(n),
        Size::Fill => None,
        Size::Auto => Some(match direction {
            Direction::Row => estimate_width(child),
            Direction::Column => estimate_height(child),
        }),
    }
}

fn cross_size_of(child: &Element, parent: &Element, available: u16) -> u16 {
    let size = match parent.direction {
        Direction::Row => child.height,
        Direction::Column => child.width,
    };
    let cross = match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => {
            if parent.align == Align::Stretch {
                available
            } else {
                match parent.direction {
                    Direction::Row => estimate_height(child),
                    Direction::Column => estimate_width(child),
                }
            }
        }
    };
    let cross = match (parent.direction, child.min_width) {
        (Direction::Column, Some(min)) => cross.max(min),
        _ => cross,
    };
    cross.min(available)
}

/// Content-driven width, used for Auto sizing. Absolute children do not
/// contribute.
fn estimate_width(element: &Element) -> u16 {
    let frame = frame_width(element) + element.padding.horizontal_total();
    let content: u16 = match &element.content {
        Content::None => 0,
        Content::Text(text) => text
            .lines()
            .map(display_width)
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16,
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position == Position::Static);
            match element.direction {
                Direction::Row => {
                    let mut total = 0u16;
                    let mut count = 0u16;
                    for child in flow {
                        total = total.saturating_add(child_width_estimate(child));
                        count += 1;
                    }
                    total.saturating_add(element.gap.saturating_mul(count.saturating_sub(1)))
                }
                Direction::Column => flow.map(child_width_estimate).max().unwrap_or(0),
            }
        }
    };
    content.saturating_add(frame)
}

fn estimate_height(element: &Element) -> u16 {
    let frame = frame_width(element) + element.padding.vertical_total();
    let content: u16 = match &element.content {
        Content::None => 0,
        Content::Text(text) => text.lines().count().max(1).min(u16::MAX as usize) as u16,
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position == Position::Static);
            match element.direction {
                Direction::Column => {
                    let mut total = 0u16;
                    let mut count = 0u16;
                    for child in flow {
                        total = total.saturating_add(child_height_estimate(child));
                        count += 1;
                    }
                    total.saturating_add(element.gap.saturating_mul(count.saturating_sub(1)))
                }
                Direction::Row => flow.map(child_height_estimate).max().unwrap_or(0),
            }
        }
    };
    content.saturating_add(frame)
}

fn child_width_estimate(child: &Element) -> u16 {
    match child.width {
        Size::Fixed(n) => n,
        _ => estimate_width(child),
    }
}

fn child_height_estimate(child: &Element) -> u16 {
    match child.height {
        Size::Fixed(n) => n,
        _ => estimate_height(child),
    }
}

fn frame_width(element: &Element) -> u16 {
    if element.style.border.is_some() {
        2
    } else {
        0
    }
}
