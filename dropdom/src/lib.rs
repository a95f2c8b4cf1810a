pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod select;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{translate_events, Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, region_contains};
pub use layout::{LayoutResult, Rect};
pub use render::render_to_buffer;
pub use select::{PanelState, Select, SelectState, SelectValue};
pub use terminal::Terminal;
pub use types::{
    Align, Border, Color, Direction, Edges, Justify, Position, Rgb, Size, Style, TextAlign,
    TextStyle, TextWrap,
};
