//! Integration tests for the phrase library
//!
//! Tests the path a phrase takes: notation typed by a user, key stored with the phrase,
//! and the all-keys practice display.

use phraselib::{
    get_transpose_amount, original_key_for, parse, parse_abc_notation, render_all_keys,
    DisplayConfig, HeaderTag, DISPLAY_KEYS, PITCH_CLASSES,
};

const PHRASE: &str = r#"% Bebop enclosure
X:12
T:Enclosure on the third
M:4/4
L:1/8
K:F
% body follows
c_BAG FAcf|e4 z4|
"#;

#[test]
fn test_parse_full_phrase() {
    let parsed = parse(PHRASE).expect("phrase should parse");
    assert_eq!(parsed.header.index.as_deref(), Some("12"));
    assert_eq!(parsed.header.title.as_deref(), Some("Enclosure on the third"));
    assert_eq!(parsed.header.meter.as_deref(), Some("4/4"));
    assert_eq!(parsed.header.note_length.as_deref(), Some("1/8"));
    assert_eq!(parsed.header.key.as_deref(), Some("F"));
    assert_eq!(parsed.body, "c_BAG FAcf|e4 z4|\n");
    assert_eq!(parsed.full_notation, PHRASE);
}

#[test]
fn test_absent_notation() {
    assert!(parse_abc_notation(None).is_none());
    assert!(parse_abc_notation(Some("")).is_none());
}

#[test]
fn test_stored_key_drives_transposition() {
    let key = original_key_for(PHRASE);
    assert_eq!(key, "F");
    assert_eq!(get_transpose_amount(&key, "Bb"), 5);
    assert_eq!(get_transpose_amount(&key, "C"), -5);
}

#[test]
fn test_all_keys_display() {
    let views = render_all_keys(PHRASE, &DisplayConfig::default());
    let keys: Vec<&str> = views.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys, DISPLAY_KEYS.to_vec());

    let amounts: Vec<i8> = views.iter().map(|v| v.transpose).collect();
    assert_eq!(amounts, vec![-5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6]);

    for view in &views {
        assert!(!view.notation.contains("T:Enclosure"));
        assert!(!view.notation.contains("M:4/4"));
        assert!(view.notation.contains("K:F"));
        assert!(view.notation.contains("c_BAG FAcf|"));
    }
}

#[test]
fn test_all_keys_with_yaml_config() {
    let config = DisplayConfig::from_yaml("display-keys: [Bb, Eb]\nhidden-tags: [X]\n").unwrap();
    let views = render_all_keys(PHRASE, &config);
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].transpose, 5);
    assert_eq!(views[1].transpose, -2);
    assert!(views[0].notation.contains("T:Enclosure"));
    assert!(!views[0].notation.contains("X:12"));
    assert_eq!(config.hidden_tags, vec![HeaderTag::X]);
}

#[test]
fn test_unrecognized_key_renders_untransposed() {
    let views = render_all_keys("K:H\nabc|", &DisplayConfig::default());
    assert!(views.iter().all(|v| v.transpose == 0));
}

#[test]
fn test_transposition_properties() {
    for a in PITCH_CLASSES {
        assert_eq!(get_transpose_amount(a, a), 0);
        for b in PITCH_CLASSES {
            let amount = get_transpose_amount(a, b);
            assert!((-11..=11).contains(&amount));
            assert_eq!(amount, -get_transpose_amount(b, a));
        }
    }
    assert_eq!(get_transpose_amount("C", "B#"), 0);
    assert_eq!(get_transpose_amount("F#m", "Am"), get_transpose_amount("F#", "A"));
}

#[test]
fn test_notation_saved_with_byte_order_mark() {
    let source = format!("\u{FEFF}{}", PHRASE);
    let parsed = parse(&source).expect("phrase should parse");
    assert_eq!(parsed.header.index.as_deref(), Some("12"));
    assert_eq!(parsed.body, "c_BAG FAcf|e4 z4|\n");
    assert_eq!(original_key_for(&source), "F");
}
