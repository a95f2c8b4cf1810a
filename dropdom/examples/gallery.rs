use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use dropdom::{
    translate_events, Color, Edges, Element, Event, Justify, Key, Select, SelectState, SelectValue,
    Size, Style, Terminal,
};

struct App {
    favorite: Select,
    favorite_state: SelectState,
    favorite_value: SelectValue,
    toppings: Select,
    toppings_state: SelectState,
    toppings_value: SelectValue,
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("gallery.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut app = App {
        favorite: Select::new("favorite")
            .options(["taco", "burrito", "churro"])
            .placeholder("Favorite Food"),
        favorite_state: SelectState::new(),
        favorite_value: SelectValue::single(""),
        toppings: Select::new("toppings")
            .options(["cheese", "salsa", "guacamole", "sour cream", "jalapeños"])
            .multi_select(true)
            .width(24)
            .placeholder("Toppings"),
        toppings_state: SelectState::new(),
        toppings_value: SelectValue::multi(Vec::<String>::new()),
    };

    let mut term = Terminal::new()?;
    loop {
        let root = ui(&app);
        term.render(&root)?;

        let raw = term.poll(None)?;
        let events = translate_events(&raw, &root, term.layout());
        // Chain through both instances; opening one dismisses the other.
        let events = app.favorite_state.process_events(
            &app.favorite,
            &app.favorite_value,
            &events,
            term.layout(),
        );
        let events = app.toppings_state.process_events(
            &app.toppings,
            &app.toppings_value,
            &events,
            term.layout(),
        );

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
                } if target == app.favorite.id() => {
                    app.favorite_value = SelectValue::from_joined(next, false);
                }
                Event::Change {
                    target,
                    value: next,
                } if target == app.toppings.id() => {
                    app.toppings_value = SelectValue::from_joined(next, true);
                }
                _ => {}
            }
        }
    }
}

fn ui(app: &App) -> Element {
    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(2))
        .gap(1)
        .style(Style::new().background(Color::oklch(0.16, 0.01, 250.0)))
        .child(
            Element::text("Select gallery").style(
                Style::new()
                    .bold()
                    .foreground(Color::oklch(0.85, 0.05, 250.0)),
            ),
        )
        .child(Element::text(
            "Two independent instances; at most one panel is ever open.",
        ))
        .child(Element::text(""))
        .child(
            Element::row()
                .gap(4)
                .child(
                    Element::col()
                        .gap(1)
                        .child(Element::text("Single").style(Style::new().dim()))
                        .child(app.favorite.build(&app.favorite_state, &app.favorite_value)),
                )
                .child(
                    Element::col()
                        .gap(1)
                        .child(Element::text("Multi").style(Style::new().dim()))
                        .child(app.toppings.build(&app.toppings_state, &app.toppings_value)),
                ),
        )
        .child(Element::new().height(Size::Fill))
        .child(
            Element::row()
                .width(Size::Fill)
                .justify(Justify::SpaceBetween)
                .child(Element::text(format!(
                    "favorite: {:?}  toppings: {:?}",
                    app.favorite_value.to_joined(),
                    app.toppings_value.to_joined()
                )))
                .child(Element::text("q or Esc quits").style(Style::new().dim())),
        )
}
