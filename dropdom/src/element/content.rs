use crate::element::Element;

/// What an element holds: nothing, a run of text, or child elements.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}
