use std::time::Instant;

use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{inner_rect, LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Rgb, TextStyle, TextWrap};

struct PaintItem<'a> {
    element: &'a Element,
    z: i16,
    order: usize,
}

fn collect<'a>(element: &'a Element, z: i16, out: &mut Vec<PaintItem<'a>>) {
    let z = z.max(element.z_index);
    out.push(PaintItem {
        element,
        z,
        order: out.len(),
    });
    if let Content::Children(children) = &element.content {
        for child in children {
            collect(child, z, out);
        }
    }
}

/// Paint the tree into `buffer` using the rects from `layout`.
///
/// Elements are painted lowest z first, tree order on ties, so an absolute
/// overlay covers everything beneath it regardless of where it sits in the
/// tree.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buffer: &mut Buffer) {
    let started = Instant::now();

    let mut items = Vec::new();
    collect(root, root.z_index, &mut items);
    items.sort_by_key(|item| (item.z, item.order));

    for item in &items {
        paint(item.element, layout, buffer);
    }

    log::debug!(
        "painted {} elements in {:?}",
        items.len(),
        started.elapsed()
    );
}

fn paint(element: &Element, layout: &LayoutResult, buffer: &mut Buffer) {
    let Some(&rect) = layout.get(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let fg = element
        .style
        .foreground
        .map(|color| color.to_rgb())
        .unwrap_or(Rgb::WHITE);
    let bg = element.style.background.map(|color| color.to_rgb());

    if let Some(bg) = bg {
        fill(buffer, rect, bg);
    }
    if element.style.border.is_some() {
        draw_border(buffer, rect, element.style.border, fg);
    }
    if let Content::Text(text) = &element.content {
        paint_text(element, rect, text, fg, bg, buffer);
    }
}

fn fill(buffer: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            buffer.set(x, y, Cell::default().with_bg(bg));
        }
    }
}

/// Corner, horizontal and vertical glyphs for each border style.
fn border_glyphs(border: Border) -> [char; 6] {
    match border {
        Border::Single => ['┌', '┐', '└', '┘', '─', '│'],
        Border::Rounded => ['╭', '╮', '╰', '╯', '─', '│'],
        Border::Double => ['╔', '╗', '╚', '╝', '═', '║'],
        Border::Thick => ['┏', '┓', '┗', '┛', '━', '┃'],
        Border::None => [' '; 6],
    }
}

fn draw_border(buffer: &mut Buffer, rect: Rect, border: Border, fg: Rgb) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let [tl, tr, bl, br, horizontal, vertical] = border_glyphs(border);
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    set_char(buffer, rect.x, rect.y, tl, fg, TextStyle::new());
    set_char(buffer, right, rect.y, tr, fg, TextStyle::new());
    set_char(buffer, rect.x, bottom, bl, fg, TextStyle::new());
    set_char(buffer, right, bottom, br, fg, TextStyle::new());
    for x in rect.x + 1..right {
        set_char(buffer, x, rect.y, horizontal, fg, TextStyle::new());
        set_char(buffer, x, bottom, horizontal, fg, TextStyle::new());
    }
    for y in rect.y + 1..bottom {
        set_char(buffer, rect.x, y, vertical, fg, TextStyle::new());
        set_char(buffer, right, y, vertical, fg, TextStyle::new());
    }
}

fn paint_text(
    element: &Element,
    rect: Rect,
    text: &str,
    fg: Rgb,
    bg: Option<Rgb>,
    buffer: &mut Buffer,
) {
    let inner = inner_rect(element, rect);
    if inner.is_empty() {
        return;
    }
    let style = element.style.text_style;

    for (row, line) in text.lines().enumerate() {
        if row as u16 >= inner.height {
            break;
        }
        let y = inner.y + row as u16;
        let line = match element.text_wrap {
            TextWrap::Truncate => truncate_to_width(line, inner.width as usize),
            TextWrap::NoWrap => line.to_string(),
        };
        let offset = align_offset(display_width(&line), inner.width as usize, element.text_align);

        let mut x = inner.x + offset as u16;
        for ch in line.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if x + w > inner.right() {
                break;
            }
            write_char(buffer, x, y, ch, fg, bg, style);
            if w == 2 {
                let continuation_bg =
                    bg.unwrap_or_else(|| buffer.get(x + 1, y).map(|c| c.bg).unwrap_or(Rgb::BLACK));
                buffer.set(x + 1, y, Cell::continuation(continuation_bg));
            }
            x += w;
        }
    }
}

fn write_char(
    buffer: &mut Buffer,
    x: u16,
    y: u16,
    ch: char,
    fg: Rgb,
    bg: Option<Rgb>,
    style: TextStyle,
) {
    let Some(existing) = buffer.get(x, y) else {
        return;
    };
    let bg = bg.unwrap_or(existing.bg);
    buffer.set(x, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
}

fn set_char(buffer: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb, style: TextStyle) {
    write_char(buffer, x, y, ch, fg, None, style);
}
