//! Build-level invariants of the canonical table and its four indexes:
//! decoder totality, uniqueness, referential integrity and determinism.

use zhuyin_tables::entry::Flags;
use zhuyin_tables::{chewing, render, symbols, TableSet};

#[test]
fn decoder_is_total_over_the_catalog() {
    for pinyin in symbols::HANYU_PINYIN_LIST {
        chewing::decode(pinyin).unwrap();
    }
    for shengmu in symbols::SHENGMU_LIST {
        chewing::initial_for_shengmu(shengmu).unwrap();
    }
}

#[test]
fn content_table_is_unique_and_sorted() {
    let tables = TableSet::build().unwrap();
    assert!(!tables.content.is_empty());
    assert_eq!(tables.content[0].pinyin, "");
    assert!(tables.content[0].key.is_zero());

    let body = &tables.content[1..];
    for pair in body.windows(2) {
        assert!(pair[0] < pair[1], "duplicate or misordered entry near '{}'", pair[1].pinyin);
        assert!(pair[0].pinyin <= pair[1].pinyin);
    }
}

#[test]
fn every_index_entry_resolves_to_a_matching_field() {
    let tables = TableSet::build().unwrap();

    for e in &tables.hanyu_index {
        assert_eq!(tables.content[e.pos].pinyin, e.key);
    }
    for e in &tables.bopomofo_index {
        assert_eq!(tables.content[e.pos].bopomofo, e.key);
    }
    for e in &tables.luoma_index {
        assert_eq!(tables.content[e.pos].luoma.as_deref(), Some(e.key.as_str()));
    }
    for e in &tables.second_index {
        assert_eq!(tables.content[e.pos].second.as_deref(), Some(e.key.as_str()));
    }
}

#[test]
fn index_tables_are_sorted_and_deduplicated() {
    let tables = TableSet::build().unwrap();
    for index in [
        &tables.hanyu_index,
        &tables.luoma_index,
        &tables.bopomofo_index,
        &tables.second_index,
    ] {
        for pair in index.windows(2) {
            assert!(
                (&pair[0].key, pair[0].flags) < (&pair[1].key, pair[1].flags),
                "index misordered near '{}'",
                pair[1].key
            );
        }
    }
}

#[test]
fn every_pinyin_entry_is_indexed() {
    let tables = TableSet::build().unwrap();
    for (pos, e) in tables.content.iter().enumerate().skip(1) {
        if e.flags.contains(Flags::IS_PINYIN) {
            let hit = tables
                .hanyu_index
                .iter()
                .find(|i| i.key == e.pinyin)
                .unwrap_or_else(|| panic!("'{}' missing from hanyu index", e.pinyin));
            // First entry with this spelling wins; positions never point past it.
            assert!(hit.pos <= pos);
        }
    }
}

#[test]
fn fragments_stay_out_of_the_bopomofo_index() {
    let tables = TableSet::build().unwrap();
    // w and y rows reuse the ㄨ/ㄧ glyphs of wu/yi; only the flagged entries
    // may appear as bopomofo lookup keys.
    for e in &tables.bopomofo_index {
        assert!(tables.content[e.pos].flags.contains(Flags::IS_BOPOMOFO));
    }
}

#[test]
fn alternate_keys_resolve_to_full_syllables() {
    let tables = TableSet::build().unwrap();
    // The w/y fragment rows sort before wu/yi; a complete-syllable lookup
    // must never land on an initial-only fragment.
    let row = |index: &[zhuyin_tables::IndexEntry], key: &str| {
        let e = index
            .iter()
            .find(|e| e.key == key)
            .unwrap_or_else(|| panic!("'{key}' missing from index"));
        tables.content[e.pos].clone()
    };
    assert_eq!(row(&tables.luoma_index, "u").pinyin, "wu");
    assert_eq!(row(&tables.luoma_index, "i").pinyin, "yi");
    assert_eq!(row(&tables.second_index, "u").pinyin, "wu");
    assert_eq!(row(&tables.second_index, "i").pinyin, "yi");
    assert_eq!(row(&tables.bopomofo_index, "ㄨ").pinyin, "wu");
    assert_eq!(row(&tables.bopomofo_index, "ㄧ").pinyin, "yi");
}

#[test]
fn build_is_idempotent() {
    let first = TableSet::build().unwrap();
    let second = TableSet::build().unwrap();
    assert_eq!(first, second);
    assert_eq!(render::content_table(&first), render::content_table(&second));
    assert_eq!(
        render::index_table(&first.hanyu_index),
        render::index_table(&second.hanyu_index)
    );
    assert_eq!(
        render::index_table(&first.second_index),
        render::index_table(&second.second_index)
    );
}

#[test]
fn sentinel_reserves_no_match() {
    let tables = TableSet::build().unwrap();
    for index in [
        &tables.hanyu_index,
        &tables.luoma_index,
        &tables.bopomofo_index,
        &tables.second_index,
    ] {
        for e in index {
            assert!(e.pos > 0, "index key '{}' resolved to the sentinel", e.key);
            assert!(e.pos < tables.content.len());
        }
    }
}
