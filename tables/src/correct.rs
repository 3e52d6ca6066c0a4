// zhuyin-tables/src/correct.rs
//
// Correction and key-switch rules for the Hsu and ET26 keyboard layouts.
// These layouts overload keys, so a typed glyph sequence may need to be
// rewritten into the intended one. The rules are static literals; validation
// checks wildcard-suffix consistency and glyph-inventory membership.

use crate::error::TableError;
use crate::keyboard;

/// A "typed wrong glyph(s) -> intended correct glyph(s)" substitution. A
/// trailing `*` matches any suffix and must appear on both sides or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectRule {
    pub correct: &'static str,
    pub wrong: &'static str,
}

const fn rule(correct: &'static str, wrong: &'static str) -> CorrectRule {
    CorrectRule { correct, wrong }
}

pub static HSU_CORRECT: &[CorrectRule] = &[
    rule("ㄓ", "ㄐ"),
    rule("ㄔ", "ㄑ"),
    rule("ㄕ", "ㄒ"),
    rule("ㄛ", "ㄏ"),
    rule("ㄜ", "ㄍ"),
    rule("ㄢ", "ㄇ"),
    rule("ㄣ", "ㄋ"),
    rule("ㄤ", "ㄎ"),
    rule("ㄦ", "ㄌ"),
    rule("ㄐㄧ*", "ㄍㄧ*"),
    rule("ㄐㄩ*", "ㄍㄩ*"),
    rule("ㄓㄨ*", "ㄐㄨ*"),
    rule("ㄔㄨ*", "ㄑㄨ*"),
    rule("ㄕㄨ*", "ㄒㄨ*"),
];

/// Variants that apply only when no medial has been entered yet
/// (ㄐㄑㄒ must be followed by ㄧ or ㄩ).
pub static HSU_CORRECT_SPECIAL: &[CorrectRule] = &[
    rule("ㄓ*", "ㄐ*"),
    rule("ㄔ*", "ㄑ*"),
    rule("ㄕ*", "ㄒ*"),
];

pub static ET26_CORRECT: &[CorrectRule] = &[
    rule("ㄓ", "ㄐ"),
    rule("ㄕ", "ㄒ"),
    rule("ㄡ", "ㄆ"),
    rule("ㄢ", "ㄇ"),
    rule("ㄣ", "ㄋ"),
    rule("ㄤ", "ㄊ"),
    rule("ㄥ", "ㄌ"),
    rule("ㄦ", "ㄏ"),
    rule("ㄓㄨ*", "ㄐㄨ*"),
    rule("ㄕㄨ*", "ㄒㄨ*"),
    rule("ㄑㄧ*", "ㄍㄧ*"),
    rule("ㄑㄩ*", "ㄍㄩ*"),
];

/// ㄐㄒ must be followed by ㄧ or ㄩ.
pub static ET26_CORRECT_SPECIAL: &[CorrectRule] = &[
    rule("ㄓ*", "ㄐ*"),
    rule("ㄕ*", "ㄒ*"),
];

/// A physical key that toggles between an initial-role and a final-role
/// glyph depending on already-entered context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchRule {
    pub key: char,
    pub from: &'static str,
    pub to: &'static str,
}

const fn switch(key: char, from: &'static str, to: &'static str) -> SwitchRule {
    SwitchRule { key, from, to }
}

pub static HSU_SWITCH: &[SwitchRule] = &[
    switch('g', "ㄍ", "ㄜ"),
    switch('h', "ㄏ", "ㄛ"),
    switch('k', "ㄎ", "ㄤ"),
    switch('l', "ㄌ", "ㄦ"),
    switch('m', "ㄇ", "ㄢ"),
    switch('n', "ㄋ", "ㄣ"),
];

pub static ET26_SWITCH: &[SwitchRule] = &[
    switch('h', "ㄏ", "ㄦ"),
    switch('l', "ㄌ", "ㄥ"),
    switch('m', "ㄇ", "ㄢ"),
    switch('n', "ㄋ", "ㄣ"),
    switch('p', "ㄆ", "ㄡ"),
    switch('t', "ㄊ", "ㄤ"),
];

fn check_pattern_glyphs(pattern: &str) -> Result<(), TableError> {
    for glyph in pattern.chars() {
        if glyph != '*' && !keyboard::is_glyph(glyph) {
            return Err(TableError::UnknownGlyph {
                pattern: pattern.to_string(),
                glyph,
            });
        }
    }
    Ok(())
}

/// Validate one rule: a `*` may only appear as a trailing wildcard, and both
/// sides must agree on whether they carry one.
pub fn check_rule(correct: &str, wrong: &str) -> Result<(), TableError> {
    let malformed = || TableError::MalformedRule {
        correct: correct.to_string(),
        wrong: wrong.to_string(),
    };
    for pattern in [correct, wrong] {
        if let Some(i) = pattern.find('*') {
            if i + 1 != pattern.len() {
                return Err(malformed());
            }
        }
    }
    if correct.ends_with('*') != wrong.ends_with('*') {
        return Err(malformed());
    }
    check_pattern_glyphs(correct)?;
    check_pattern_glyphs(wrong)
}

/// Validate every correction and switch rule table.
pub fn validate_all() -> Result<(), TableError> {
    for rules in [HSU_CORRECT, HSU_CORRECT_SPECIAL, ET26_CORRECT, ET26_CORRECT_SPECIAL] {
        for r in rules {
            check_rule(r.correct, r.wrong)?;
        }
    }
    for rules in [HSU_SWITCH, ET26_SWITCH] {
        for r in rules {
            check_rule(r.from, r.to)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_rules_are_well_formed() {
        validate_all().unwrap();
    }

    #[test]
    fn wildcard_must_match_sides() {
        assert!(check_rule("ㄓ*", "ㄐ*").is_ok());
        assert!(check_rule("ㄓ", "ㄐ").is_ok());
        assert!(matches!(
            check_rule("ㄓ*", "ㄐ"),
            Err(TableError::MalformedRule { .. })
        ));
        assert!(matches!(
            check_rule("ㄓ", "ㄐ*"),
            Err(TableError::MalformedRule { .. })
        ));
    }

    #[test]
    fn interior_wildcard_rejected() {
        assert!(matches!(
            check_rule("ㄓ*ㄨ", "ㄐ*ㄨ"),
            Err(TableError::MalformedRule { .. })
        ));
    }

    #[test]
    fn foreign_glyph_rejected() {
        assert!(matches!(
            check_rule("ㄓ", "x"),
            Err(TableError::UnknownGlyph { .. })
        ));
        // Tone marks are not substitutable glyphs.
        assert!(matches!(
            check_rule("ㄓ", "ˊ"),
            Err(TableError::UnknownGlyph { .. })
        ));
    }
}
