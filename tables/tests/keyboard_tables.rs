//! Keyboard-facing tables: layout coverage, rendered key tables and the
//! Hsu/ET26 correction rule sets.

use zhuyin_tables::correct;
use zhuyin_tables::keyboard::{self, Layout, BOPOMOFO_SYMBOLS, NUM_TONES};
use zhuyin_tables::render;

#[test]
fn every_layout_binds_the_full_inventory() {
    assert_eq!(BOPOMOFO_SYMBOLS.len(), 42);
    for layout in Layout::ALL {
        let pairs = keyboard::symbol_pairs(layout);
        assert_eq!(pairs.len(), BOPOMOFO_SYMBOLS.len() - NUM_TONES);
        assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0), "{}", layout.name());

        let tones = keyboard::tone_pairs(layout);
        assert_eq!(tones.len(), NUM_TONES);
        assert!(tones.windows(2).all(|w| w[0].0 < w[1].0));
        let mut numbers: Vec<usize> = tones.iter().map(|t| t.1).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn layout_names_round_trip() {
    for layout in Layout::ALL {
        assert_eq!(Layout::from_name(layout.name()), Some(layout));
    }
    assert_eq!(Layout::from_name("DVORAK"), None);
}

#[test]
fn rendered_key_tables_carry_sentinels() {
    for layout in Layout::ALL {
        let symbols = render::keyboard_symbols(layout);
        let lines: Vec<&str> = symbols.lines().collect();
        assert_eq!(lines.len(), BOPOMOFO_SYMBOLS.len() - NUM_TONES + 1);
        assert_eq!(*lines.last().unwrap(), "{'\\0', NULL}");

        let tones = render::keyboard_tones(layout);
        let lines: Vec<&str> = tones.lines().collect();
        assert_eq!(lines.len(), NUM_TONES + 1);
        assert_eq!(*lines.last().unwrap(), "{'\\0', 0}");
    }
}

#[test]
fn apostrophe_keys_render_escaped() {
    // GinYieh and Eten both bind the apostrophe key.
    for layout in [Layout::GinYieh, Layout::Eten] {
        assert!(render::keyboard_symbols(layout).contains("'\\''"));
    }
}

#[test]
fn standard_layout_spot_checks() {
    let pairs = keyboard::symbol_pairs(Layout::Standard);
    let glyph_of = |key: char| pairs.iter().find(|p| p.0 == key).map(|p| p.1);
    assert_eq!(glyph_of('1'), Some('ㄅ'));
    assert_eq!(glyph_of('u'), Some('ㄧ'));
    assert_eq!(glyph_of('-'), Some('ㄦ'));
}

#[test]
fn shipped_correction_rules_validate() {
    correct::validate_all().unwrap();
}

#[test]
fn switch_rules_use_layout_keys() {
    for (rules, layout) in [
        (correct::HSU_SWITCH, "hsu"),
        (correct::ET26_SWITCH, "et26"),
    ] {
        for r in rules {
            assert!(r.key.is_ascii_lowercase(), "{layout}: {}", r.key);
            assert_ne!(r.from, r.to);
            assert!(r.from.chars().all(keyboard::is_glyph));
            assert!(r.to.chars().all(keyboard::is_glyph));
        }
    }
}

#[test]
fn correction_rules_pair_distinct_patterns() {
    for rules in [
        correct::HSU_CORRECT,
        correct::HSU_CORRECT_SPECIAL,
        correct::ET26_CORRECT,
        correct::ET26_CORRECT_SPECIAL,
    ] {
        for r in rules {
            assert_ne!(r.correct, r.wrong);
            assert_eq!(r.correct.ends_with('*'), r.wrong.ends_with('*'));
        }
    }
}
