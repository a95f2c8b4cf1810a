use dropdom::layout::layout;
use dropdom::{
    Align, Border, Edges, Element, Event, Justify, Position, Rect, Select, SelectState,
    SelectValue, Size, Style,
};

const SCREEN: Rect = Rect::from_size(60, 24);

fn open_state() -> SelectState {
    let mut state = SelectState::new();
    state.open();
    state
}

// ============================================================
// Flow layout
// ============================================================

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .child(
            Element::new()
                .id("a")
                .width(Size::Fixed(5))
                .height(Size::Fixed(2)),
        )
        .child(
            Element::new()
                .id("b")
                .width(Size::Fixed(5))
                .height(Size::Fixed(3)),
        );
    let result = layout(&root, SCREEN);
    assert_eq!(result["a"], Rect::new(0, 0, 5, 2));
    assert_eq!(result["b"], Rect::new(0, 2, 5, 3));
}

#[test]
fn test_column_gap() {
    let root = Element::col()
        .id("root")
        .gap(1)
        .child(
            Element::new()
                .id("a")
                .width(Size::Fixed(5))
                .height(Size::Fixed(2)),
        )
        .child(
            Element::new()
                .id("b")
                .width(Size::Fixed(5))
                .height(Size::Fixed(2)),
        );
    let result = layout(&root, SCREEN);
    assert_eq!(result["b"].y, 3);
}

#[test]
fn test_row_places_side_by_side() {
    let root = Element::row()
        .id("root")
        .child(
            Element::new()
                .id("a")
                .width(Size::Fixed(4))
                .height(Size::Fixed(2)),
        )
        .child(
            Element::new()
                .id("b")
                .width(Size::Fixed(6))
                .height(Size::Fixed(2)),
        );
    let result = layout(&root, SCREEN);
    assert_eq!(result["a"], Rect::new(0, 0, 4, 2));
    assert_eq!(result["b"], Rect::new(4, 0, 6, 2));
}

#[test]
fn test_fill_splits_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(3))
        .child(
            Element::new()
                .id("a")
                .width(Size::Fixed(10))
                .height(Size::Fixed(3)),
        )
        .child(Element::new().id("b").width(Size::Fill).height(Size::Fixed(3)))
        .child(Element::new().id("c").width(Size::Fill).height(Size::Fixed(3)));
    let result = layout(&root, SCREEN);
    assert_eq!(result["b"], Rect::new(10, 0, 15, 3));
    assert_eq!(result["c"], Rect::new(25, 0, 15, 3));
}

#[test]
fn test_fill_remainder_goes_to_first() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(41))
        .height(Size::Fixed(3))
        .child(
            Element::new()
                .id("a")
                .width(Size::Fixed(10))
                .height(Size::Fixed(3)),
        )
        .child(Element::new().id("b").width(Size::Fill).height(Size::Fixed(3)))
        .child(Element::new().id("c").width(Size::Fill).height(Size::Fixed(3)));
    let result = layout(&root, SCREEN);
    assert_eq!(result["b"].width, 16);
    assert_eq!(result["c"].width, 15);
    assert_eq!(result["c"].right(), 41);
}

#[test]
fn test_border_and_padding_shrink_content() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .padding(Edges::all(1))
        .style(Style::new().border(Border::Single))
        .child(Element::new().id("a").width(Size::Fill).height(Size::Fill));
    let result = layout(&root, SCREEN);
    assert_eq!(result["a"], Rect::new(2, 2, 16, 6));
}

#[test]
fn test_auto_text_sizes_to_content() {
    let root = Element::col().id("root").child(Element::text("hello").id("a"));
    let result = layout(&root, SCREEN);
    assert_eq!(result["a"], Rect::new(0, 0, 5, 1));
}

#[test]
fn test_justify_space_between() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(1))
        .justify(Justify::SpaceBetween)
        .child(
            Element::new()
                .id("a")
                .width(Size::Fixed(4))
                .height(Size::Fixed(1)),
        )
        .child(
            Element::new()
                .id("b")
                .width(Size::Fixed(4))
                .height(Size::Fixed(1)),
        );
    let result = layout(&root, SCREEN);
    assert_eq!(result["a"].x, 0);
    assert_eq!(result["b"].x, 16);
}

#[test]
fn test_align_center_on_cross_axis() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .align(Align::Center)
        .child(
            Element::new()
                .id("a")
                .width(Size::Fixed(4))
                .height(Size::Fixed(1)),
        );
    let result = layout(&root, SCREEN);
    assert_eq!(result["a"].y, 2);
}

#[test]
fn test_fixed_width_capped_by_available() {
    let root = Element::new()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(3));
    let result = layout(&root, SCREEN);
    assert_eq!(result["root"].width, 60);
}

#[test]
fn test_min_width_raises_auto() {
    let root = Element::col()
        .id("root")
        .child(Element::text("hi").id("a").min_width(10));
    let result = layout(&root, SCREEN);
    assert_eq!(result["a"].width, 10);
}

// ============================================================
// Absolute positioning
// ============================================================

#[test]
fn test_absolute_offsets_from_parent_corner() {
    let root = Element::col()
        .id("root")
        .child(Element::new().id("spacer").height(Size::Fixed(2)))
        .child(
            Element::new()
                .id("parent")
                .width(Size::Fixed(20))
                .height(Size::Fixed(3))
                .child(
                    Element::new()
                        .id("overlay")
                        .position(Position::Absolute)
                        .left(2)
                        .top(3)
                        .width(Size::Fixed(5))
                        .height(Size::Fixed(2)),
                ),
        );
    let result = layout(&root, SCREEN);
    assert_eq!(result["parent"], Rect::new(0, 2, 20, 3));
    assert_eq!(result["overlay"], Rect::new(2, 5, 5, 2));
}

#[test]
fn test_absolute_child_may_overflow_parent() {
    let root = Element::new()
        .id("parent")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .child(
            Element::new()
                .id("overlay")
                .position(Position::Absolute)
                .top(3)
                .width(Size::Fixed(10))
                .height(Size::Fixed(5)),
        );
    let result = layout(&root, SCREEN);
    assert_eq!(result["overlay"], Rect::new(0, 3, 10, 5));
}

#[test]
fn test_absolute_child_does_not_affect_flow() {
    let root = Element::col()
        .id("root")
        .child(
            Element::new()
                .id("a")
                .width(Size::Fixed(5))
                .height(Size::Fixed(3))
                .child(
                    Element::new()
                        .id("overlay")
                        .position(Position::Absolute)
                        .top(3)
                        .width(Size::Fixed(5))
                        .height(Size::Fixed(5)),
                ),
        )
        .child(
            Element::new()
                .id("b")
                .width(Size::Fixed(5))
                .height(Size::Fixed(2)),
        );
    let result = layout(&root, SCREEN);
    // The next flow sibling lands right below "a", under the overlay.
    assert_eq!(result["b"].y, 3);
}

// ============================================================
// Select widget
// ============================================================

#[test]
fn test_trigger_sizes_to_display_text() {
    let select = Select::new("food")
        .options(["taco", "burrito", "churro"])
        .placeholder("Favorite Food");
    let root = select.build(&SelectState::new(), &SelectValue::single(""));
    let result = layout(&root, SCREEN);
    // "Favorite Food" is 13 cells; border, padding, gap and arrow add 6.
    assert_eq!(result[&select.trigger_id()], Rect::new(0, 0, 19, 3));
    assert_eq!(result[&select.label_id()].width, 13);
}

#[test]
fn test_closed_select_has_no_panel() {
    let select = Select::new("food").options(["taco", "burrito", "churro"]);
    let root = select.build(&SelectState::new(), &SelectValue::single(""));
    let result = layout(&root, SCREEN);
    assert!(!result.contains_key(&select.panel_id()));
}

#[test]
fn test_panel_sits_directly_below_trigger() {
    let select = Select::new("food")
        .options(["taco", "burrito", "churro"])
        .placeholder("Favorite Food");
    let root = select.build(&open_state(), &SelectValue::single(""));
    let result = layout(&root, SCREEN);
    let trigger = result[&select.trigger_id()];
    let panel = result[&select.panel_id()];
    assert_eq!(panel.x, trigger.x);
    assert_eq!(panel.y, trigger.bottom());
    // Affordance row plus three options, inside the border.
    assert_eq!(panel.height, 6);
}

#[test]
fn test_panel_no_narrower_than_trigger() {
    let select = Select::new("food")
        .options(["taco", "burrito", "churro"])
        .placeholder("Favorite Food");
    let root = select.build(&open_state(), &SelectValue::single(""));
    let result = layout(&root, SCREEN);
    assert_eq!(
        result[&select.panel_id()].width,
        result[&select.trigger_id()].width
    );
}

#[test]
fn test_panel_grows_past_narrow_trigger() {
    let select = Select::new("food")
        .options(["a considerably longer option label"])
        .width(10);
    let root = select.build(&open_state(), &SelectValue::single(""));
    let result = layout(&root, SCREEN);
    assert_eq!(result[&select.trigger_id()].width, 10);
    assert!(result[&select.panel_id()].width > 10);
}

#[test]
fn test_full_width_spans_container() {
    let select = Select::new("food")
        .options(["taco", "burrito", "churro"])
        .full_width(true);
    let root = select.build(&open_state(), &SelectValue::single(""));
    let result = layout(&root, SCREEN);
    assert_eq!(result[&select.trigger_id()].width, 60);
    assert_eq!(result[&select.panel_id()].width, 60);
}

#[test]
fn test_fixed_width_applies() {
    let select = Select::new("food")
        .options(["taco", "burrito", "churro"])
        .width(24);
    let root = select.build(&SelectState::new(), &SelectValue::single(""));
    let result = layout(&root, SCREEN);
    assert_eq!(result[&select.trigger_id()].width, 24);
}

#[test]
fn test_window_limits_rows_in_layout() {
    let select = Select::new("big")
        .options((0..100).map(|i| format!("option {i}")))
        .placeholder("Pick");
    let root = select.build(&open_state(), &SelectValue::single(""));
    let result = layout(&root, SCREEN);
    // Eight rows visible: the affordance plus options 0 through 6.
    assert_eq!(result[&select.panel_id()].height, 10);
    assert!(result.contains_key(&select.clear_item_id()));
    assert!(result.contains_key(&select.option_id(6)));
    assert!(!result.contains_key(&select.option_id(7)));
}

#[test]
fn test_scrolled_window_shifts_rows() {
    let select = Select::new("big")
        .options((0..100).map(|i| format!("option {i}")))
        .placeholder("Pick");
    let mut state = open_state();
    let value = SelectValue::single("");

    let root = select.build(&state, &value);
    let result = layout(&root, SCREEN);
    let panel = result[&select.panel_id()];
    state.process_events(
        &select,
        &value,
        &[Event::Scroll {
            x: panel.x + 1,
            y: panel.y + 1,
            delta: 5,
        }],
        &result,
    );

    let root = select.build(&state, &value);
    let result = layout(&root, SCREEN);
    assert!(!result.contains_key(&select.clear_item_id()));
    assert!(!result.contains_key(&select.option_id(3)));
    let top_row = result[&select.option_id(4)];
    assert_eq!(top_row.y, result[&select.panel_id()].y + 1);
}
