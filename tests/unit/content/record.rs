use super::*;

fn ghost() -> ContentRecord {
    ContentRecord::new(
        "Doom-Waffle Prime",
        TypeLabel::Ghost,
        ("Vanish Speed", 2800),
        ("Commitment", 200),
        "When this card is activated, all plans are cancelled.",
    )
    .unwrap()
}

#[test]
fn labels_parse_exactly() {
    for label in TypeLabel::ALL {
        assert_eq!(TypeLabel::parse(label.as_str()), Some(label));
    }
    assert_eq!(TypeLabel::parse("IYKYK"), Some(TypeLabel::Iykyk));
    assert_eq!(TypeLabel::parse("ghost"), None);
    assert_eq!(TypeLabel::parse("Wizard"), None);
}

#[test]
fn strict_constructor_accepts_in_bounds_record() {
    let r = ghost();
    assert_eq!(r.name(), "Doom-Waffle Prime");
    assert_eq!(r.type_label(), TypeLabel::Ghost);
    assert_eq!(r.stat1().value.get(), 2800);
    assert_eq!(r.stat2().name, "Commitment");
}

#[test]
fn stat_values_are_range_and_step_checked() {
    assert!(StatValue::new(100).is_ok());
    assert!(StatValue::new(3000).is_ok());
    assert!(StatValue::new(0).is_err());
    assert!(StatValue::new(3100).is_err());
    assert!(StatValue::new(150).is_err());
}

#[test]
fn strict_constructor_rejects_out_of_bounds_text() {
    let long_name = "x".repeat(MAX_NAME_CHARS + 1);
    let err = ContentRecord::new(long_name, TypeLabel::Vibe, ("a", 100), ("b", 100), "ok")
        .unwrap_err();
    assert!(matches!(err, CardError::ContentValidation(_)));

    assert!(
        ContentRecord::new("Name", TypeLabel::Vibe, ("a", 100), ("b", 100), "x".repeat(281))
            .is_err()
    );
    assert!(
        ContentRecord::new("Na\u{e9}me", TypeLabel::Vibe, ("a", 100), ("b", 100), "ok").is_err()
    );
    assert!(ContentRecord::new("   ", TypeLabel::Vibe, ("a", 100), ("b", 100), "ok").is_err());
    assert!(
        ContentRecord::new("Name", TypeLabel::Vibe, ("a\nb", 100), ("b", 100), "ok").is_err()
    );
}

#[test]
fn sanitize_keeps_only_card_alphabet() {
    assert_eq!(sanitize_ascii("Hi! <b>caf\u{e9}</b> #1?"), "Hi! bcafb 1?");
    assert_eq!(sanitize_ascii("it's - ok.\n"), "it's - ok.\n");
}

#[test]
fn shorten_marks_the_cut() {
    assert_eq!(shorten_to_chars("short", 10), "short");
    let s = shorten_to_chars("aaaa bbbb cccc", 10);
    assert_eq!(s, "aaaa bb...");
    assert_eq!(s.chars().count(), 10);
    assert_eq!(shorten_to_chars("abcdef", 2), "ab");
    assert_eq!(shorten_to_chars("abcd    efgh", 9), "abcd...");
}

#[test]
fn from_raw_fills_defaults() {
    let r = ContentRecord::from_raw(RawContentRecord::default()).unwrap();
    assert_eq!(r.name(), "Unknown Card");
    assert_eq!(r.type_label(), TypeLabel::Vibe);
    assert_eq!(r.stat1().name, "Power");
    assert_eq!(r.stat1().value.get(), 1000);
    assert_eq!(r.stat2().name, "Defense");
    assert_eq!(r.description(), "No description available.");
}

#[test]
fn from_raw_sanitizes_and_shortens() {
    let raw = RawContentRecord {
        card_name: Some("The \u{1F9C7} Doom-Waffle Prime Supreme Overlord".to_string()),
        custom_type: Some("Ghost".to_string()),
        stat1_name: Some("Vanish Speed".to_string()),
        stat1_value: Some(2800),
        stat2_name: Some("Commitment".to_string()),
        stat2_value: Some(200),
        effect_description: Some(format!("{} \u{2728}", "word ".repeat(70))),
    };
    let r = ContentRecord::from_raw(raw).unwrap();
    assert!(r.name().chars().count() <= MAX_NAME_CHARS);
    assert!(r.name().starts_with("The  Doom-Waffle"));
    assert!(r.description().chars().count() <= MAX_DESCRIPTION_CHARS);
    assert!(r.description().ends_with("..."));
}

#[test]
fn from_raw_rejects_unknown_type_and_bad_stats() {
    let raw = RawContentRecord {
        custom_type: Some("Wizard".to_string()),
        ..RawContentRecord::default()
    };
    assert!(ContentRecord::from_raw(raw).is_err());

    let raw = RawContentRecord {
        stat1_value: Some(5000),
        ..RawContentRecord::default()
    };
    assert!(ContentRecord::from_raw(raw).is_err());
}

#[test]
fn raw_record_parses_generator_json() {
    let raw = RawContentRecord::from_json(
        r#"{"card_name":"Sir Lag","custom_type":"Lag","stat1_value":1200,"extra":"ignored"}"#,
    )
    .unwrap();
    assert_eq!(raw.card_name.as_deref(), Some("Sir Lag"));
    assert_eq!(raw.stat1_value, Some(1200));
    assert!(RawContentRecord::from_json("{not json").is_err());
}
