use std::collections::HashSet;

/// Host-owned selection value of a [`Select`](crate::select::Select).
///
/// The two shapes never mix: a single-select widget reads and emits
/// `Single`, a multi-select one `Multi`. The empty string and the empty list
/// both mean "nothing selected". Values are compared to options by plain
/// string equality; a value that matches no option is legal and simply never
/// shows a selected row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue {
    Single(String),
    Multi(Vec<String>),
}

impl SelectValue {
    pub fn single(value: impl Into<String>) -> Self {
        SelectValue::Single(value.into())
    }

    /// Multi value from any string iterator, dropping duplicate entries
    /// while keeping first-seen order.
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectValue::Multi(dedup(values.into_iter().map(Into::into)))
    }

    /// Parse the serialized form carried by a change event. The empty
    /// string always means "nothing selected", in both modes.
    pub fn from_joined(text: &str, multi: bool) -> Self {
        if !multi {
            return SelectValue::Single(text.to_string());
        }
        if text.is_empty() {
            return SelectValue::Multi(Vec::new());
        }
        SelectValue::Multi(dedup(text.split(',').map(str::to_string)))
    }

    /// Serialized form for change events: the value itself, or entries
    /// joined with bare commas. Entries are not escaped, so an option label
    /// containing a comma produces a string that parses back differently;
    /// hosts with such labels should track entries themselves.
    pub fn to_joined(&self) -> String {
        match self {
            SelectValue::Single(value) => value.clone(),
            SelectValue::Multi(values) => values.join(","),
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, SelectValue::Multi(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SelectValue::Single(value) => value.is_empty(),
            SelectValue::Multi(values) => values.is_empty(),
        }
    }

    /// Whether `option` is part of the current selection.
    pub fn is_selected(&self, option: &str) -> bool {
        match self {
            SelectValue::Single(value) => value == option,
            SelectValue::Multi(values) => values.iter().any(|v| v == option),
        }
    }

    /// Selection after activating `option`.
    ///
    /// Single mode replaces the value outright (the empty string clears
    /// it). Multi mode adds or removes the entry and rebuilds the list by
    /// filtering `options`, so the result is always in option-list order no
    /// matter what order the user clicked in; entries not present in
    /// `options` are dropped along the way.
    pub fn toggle(&self, option: &str, options: &[String]) -> SelectValue {
        match self {
            SelectValue::Single(_) => SelectValue::Single(option.to_string()),
            SelectValue::Multi(values) => {
                let selected: HashSet<&str> = values.iter().map(String::as_str).collect();
                let next = if selected.contains(option) {
                    options
                        .iter()
                        .filter(|o| o.as_str() != option && selected.contains(o.as_str()))
                        .cloned()
                        .collect()
                } else {
                    options
                        .iter()
                        .filter(|o| o.as_str() == option || selected.contains(o.as_str()))
                        .cloned()
                        .collect()
                };
                SelectValue::Multi(next)
            }
        }
    }

    /// Selection after activating the all-options row: everything, unless
    /// everything was already selected, in which case nothing. Meaningful
    /// for multi values only; a single value is returned unchanged.
    pub fn toggle_all(&self, options: &[String]) -> SelectValue {
        match self {
            SelectValue::Single(_) => self.clone(),
            SelectValue::Multi(_) => {
                if self.all_selected(options) {
                    SelectValue::Multi(Vec::new())
                } else {
                    SelectValue::Multi(options.to_vec())
                }
            }
        }
    }

    /// Whether the selection covers the whole option list. Counts entries
    /// rather than matching them, like the all-options row toggles by count.
    pub fn all_selected(&self, options: &[String]) -> bool {
        match self {
            SelectValue::Single(_) => false,
            SelectValue::Multi(values) => values.len() == options.len(),
        }
    }

    /// Text shown on the trigger: the selection, or `placeholder` when
    /// nothing is selected. Multi selections are joined with ", ".
    pub fn display_text(&self, placeholder: &str) -> String {
        match self {
            SelectValue::Single(value) => {
                if value.is_empty() {
                    placeholder.to_string()
                } else {
                    value.clone()
                }
            }
            SelectValue::Multi(values) => {
                if values.is_empty() {
                    placeholder.to_string()
                } else {
                    values.join(", ")
                }
            }
        }
    }
}

fn dedup(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}
