use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use dropdom::{
    translate_events, Color, Edges, Element, Event, Key, Select, SelectState, SelectValue, Size,
    Style, Terminal,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("single_select.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let select = Select::new("favorite")
        .options(["taco", "burrito", "churro"])
        .placeholder("Favorite Food");
    let mut state = SelectState::new();
    let mut value = SelectValue::single("");

    let mut term = Terminal::new()?;
    loop {
        let root = ui(&select, &state, &value);
        term.render(&root)?;

        let raw = term.poll(None)?;
        let events = translate_events(&raw, &root, term.layout());
        let events = state.process_events(&select, &value, &events, term.layout());

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q'),
                    ..
                }
                | Event::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                Event::Change {
                    target,
                    value: next,
                } if target == select.id() => {
                    value = SelectValue::from_joined(next, false);
                }
                _ => {}
            }
        }
    }
}

fn ui(select: &Select, state: &SelectState, value: &SelectValue) -> Element {
    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(2))
        .gap(1)
        .style(Style::new().background(Color::oklch(0.16, 0.01, 250.0)))
        .child(
            Element::text("Single select").style(
                Style::new()
                    .bold()
                    .foreground(Color::oklch(0.85, 0.05, 250.0)),
            ),
        )
        .child(Element::text(
            "Click the trigger to open, pick an option, press anywhere else to dismiss.",
        ))
        .child(select.build(state, value))
        .child(Element::text(format!("value: {:?}", value.to_joined())))
        .child(Element::text("q or Esc quits").style(Style::new().dim()))
}
