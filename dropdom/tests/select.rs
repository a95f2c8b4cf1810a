use dropdom::SelectValue;

fn food_options() -> Vec<String> {
    vec!["taco".to_string(), "burrito".to_string(), "churro".to_string()]
}

// ============================================================
// Display text
// ============================================================

#[test]
fn test_single_display_shows_value() {
    let value = SelectValue::single("burrito");
    assert_eq!(value.display_text("Favorite Food"), "burrito");
}

#[test]
fn test_single_display_placeholder_when_empty() {
    let value = SelectValue::single("");
    assert_eq!(value.display_text("Favorite Food"), "Favorite Food");
}

#[test]
fn test_single_display_unmatched_value_shows_itself() {
    // A value that is not in the option list still displays as-is.
    let value = SelectValue::single("pizza");
    assert_eq!(value.display_text("Favorite Food"), "pizza");
}

#[test]
fn test_multi_display_joins_with_comma_space() {
    let value = SelectValue::multi(["taco", "churro"]);
    assert_eq!(value.display_text("Pick a few"), "taco, churro");
}

#[test]
fn test_multi_display_placeholder_when_empty() {
    let value = SelectValue::multi(Vec::<String>::new());
    assert_eq!(value.display_text("Pick a few"), "Pick a few");
}

// ============================================================
// Emptiness and membership
// ============================================================

#[test]
fn test_is_empty() {
    assert!(SelectValue::single("").is_empty());
    assert!(SelectValue::multi(Vec::<String>::new()).is_empty());
    assert!(!SelectValue::single("taco").is_empty());
    assert!(!SelectValue::multi(["taco"]).is_empty());
}

#[test]
fn test_is_selected_single() {
    let value = SelectValue::single("taco");
    assert!(value.is_selected("taco"));
    assert!(!value.is_selected("burrito"));
}

#[test]
fn test_is_selected_multi() {
    let value = SelectValue::multi(["taco", "churro"]);
    assert!(value.is_selected("taco"));
    assert!(value.is_selected("churro"));
    assert!(!value.is_selected("burrito"));
}

// ============================================================
// Toggle, single mode
// ============================================================

#[test]
fn test_single_toggle_picks_option() {
    let options = food_options();
    let value = SelectValue::single("").toggle("burrito", &options);
    assert_eq!(value, SelectValue::single("burrito"));
}

#[test]
fn test_single_toggle_replaces_previous() {
    let options = food_options();
    let value = SelectValue::single("taco").toggle("churro", &options);
    assert_eq!(value, SelectValue::single("churro"));
}

#[test]
fn test_single_toggle_empty_clears() {
    let options = food_options();
    let value = SelectValue::single("taco").toggle("", &options);
    assert_eq!(value, SelectValue::single(""));
    assert!(value.is_empty());
}

// ============================================================
// Toggle, multi mode
// ============================================================

#[test]
fn test_multi_toggle_adds_entry() {
    let options = food_options();
    let value = SelectValue::multi(Vec::<String>::new()).toggle("churro", &options);
    assert_eq!(value, SelectValue::multi(["churro"]));
}

#[test]
fn test_multi_toggle_removes_entry() {
    let options = food_options();
    let value = SelectValue::multi(["taco", "churro"]).toggle("churro", &options);
    assert_eq!(value, SelectValue::multi(["taco"]));
}

#[test]
fn test_multi_toggle_result_in_option_order() {
    // Clicking churro then taco still yields option-list order.
    let options = food_options();
    let value = SelectValue::multi(Vec::<String>::new())
        .toggle("churro", &options)
        .toggle("taco", &options);
    assert_eq!(value.to_joined(), "taco,churro");
}

#[test]
fn test_multi_toggle_twice_restores() {
    let options = food_options();
    let start = SelectValue::multi(["taco"]);
    let value = start.toggle("burrito", &options).toggle("burrito", &options);
    assert_eq!(value, start);
}

#[test]
fn test_multi_toggle_drops_entries_not_in_options() {
    let options = food_options();
    let value = SelectValue::multi(["pizza", "churro"]).toggle("taco", &options);
    assert_eq!(value, SelectValue::multi(["taco", "churro"]));
}

// ============================================================
// Select all
// ============================================================

#[test]
fn test_toggle_all_from_empty_selects_everything() {
    let options = food_options();
    let value = SelectValue::multi(Vec::<String>::new()).toggle_all(&options);
    assert_eq!(value.to_joined(), "taco,burrito,churro");
}

#[test]
fn test_toggle_all_from_partial_selects_everything() {
    let options = food_options();
    let value = SelectValue::multi(["burrito"]).toggle_all(&options);
    assert_eq!(value.to_joined(), "taco,burrito,churro");
}

#[test]
fn test_toggle_all_from_full_clears() {
    let options = food_options();
    let value = SelectValue::multi(["taco", "burrito", "churro"]).toggle_all(&options);
    assert!(value.is_empty());
    assert_eq!(value.to_joined(), "");
}

#[test]
fn test_toggle_all_twice_returns_to_extreme() {
    let options = food_options();
    let empty = SelectValue::multi(Vec::<String>::new());
    assert!(empty.toggle_all(&options).toggle_all(&options).is_empty());

    let full = SelectValue::multi(["taco", "burrito", "churro"]);
    assert_eq!(
        full.toggle_all(&options).toggle_all(&options).to_joined(),
        "taco,burrito,churro"
    );
}

#[test]
fn test_toggle_all_with_no_options_stays_empty() {
    let value = SelectValue::multi(Vec::<String>::new()).toggle_all(&[]);
    assert!(value.is_empty());
}

#[test]
fn test_all_selected() {
    let options = food_options();
    assert!(SelectValue::multi(["taco", "burrito", "churro"]).all_selected(&options));
    assert!(!SelectValue::multi(["taco"]).all_selected(&options));
    assert!(!SelectValue::single("taco").all_selected(&options));
}

// ============================================================
// Serialization
// ============================================================

#[test]
fn test_to_joined_single_is_value() {
    assert_eq!(SelectValue::single("taco").to_joined(), "taco");
    assert_eq!(SelectValue::single("").to_joined(), "");
}

#[test]
fn test_to_joined_multi_uses_bare_commas() {
    let value = SelectValue::multi(["taco", "churro"]);
    assert_eq!(value.to_joined(), "taco,churro");
}

#[test]
fn test_from_joined_single() {
    assert_eq!(
        SelectValue::from_joined("burrito", false),
        SelectValue::single("burrito")
    );
    assert_eq!(SelectValue::from_joined("", false), SelectValue::single(""));
}

#[test]
fn test_from_joined_multi() {
    assert_eq!(
        SelectValue::from_joined("taco,churro", true),
        SelectValue::multi(["taco", "churro"])
    );
}

#[test]
fn test_from_joined_empty_multi_is_no_selection() {
    let value = SelectValue::from_joined("", true);
    assert_eq!(value, SelectValue::multi(Vec::<String>::new()));
    assert!(value.is_empty());
}

#[test]
fn test_from_joined_multi_dedups_preserving_order() {
    assert_eq!(
        SelectValue::from_joined("churro,taco,churro", true),
        SelectValue::multi(["churro", "taco"])
    );
}

#[test]
fn test_comma_in_label_round_trips_differently() {
    // Entries are joined with bare commas, so a label containing one is
    // indistinguishable from two entries after parsing.
    let value = SelectValue::multi(["mac, extra cheese"]);
    let parsed = SelectValue::from_joined(&value.to_joined(), true);
    assert_ne!(parsed, value);
    assert_eq!(parsed, SelectValue::multi(["mac", " extra cheese"]));
}
