// zhuyin-tables/src/keyboard.rs
//
// Bopomofo keyboard layouts: a fixed glyph inventory in keyboard order and
// four physical layouts mapping keys positionally onto it. The last five
// positions are the tone marks.

/// Glyph inventory in keyboard order: 21 initials, 16 medials/finals, then
/// the 5 tone marks (first tone is unmarked and sits on the space key).
pub const BOPOMOFO_SYMBOLS: [char; 42] = [
    'ㄅ', 'ㄆ', 'ㄇ', 'ㄈ', 'ㄉ', 'ㄊ', 'ㄋ', 'ㄌ', 'ㄍ', 'ㄎ', 'ㄏ', 'ㄐ',
    'ㄑ', 'ㄒ', 'ㄓ', 'ㄔ', 'ㄕ', 'ㄖ', 'ㄗ', 'ㄘ', 'ㄙ', 'ㄧ', 'ㄨ', 'ㄩ',
    'ㄚ', 'ㄛ', 'ㄜ', 'ㄝ', 'ㄞ', 'ㄟ', 'ㄠ', 'ㄡ', 'ㄢ', 'ㄣ', 'ㄤ', 'ㄥ',
    'ㄦ', 'ˉ', 'ˊ', 'ˇ', 'ˋ', '˙',
];

/// Tone marks occupy the last five inventory positions.
pub const NUM_TONES: usize = 5;

const STANDARD_KEYS: [char; 42] = [
    '1', 'q', 'a', 'z', '2', 'w', 's', 'x', 'e', 'd', 'c', 'r', 'f', 'v', '5',
    't', 'g', 'b', 'y', 'h', 'n', 'u', 'j', 'm', '8', 'i', 'k', ',', '9', 'o',
    'l', '.', '0', 'p', ';', '/', '-', ' ', '6', '3', '4', '7',
];

const GIN_YIEH_KEYS: [char; 42] = [
    '2', 'w', 's', 'x', '3', 'e', 'd', 'c', 'r', 'f', 'v', 't', 'g', 'b', '6',
    'y', 'h', 'n', 'u', 'j', 'm', '-', '[', '\'', '8', 'i', 'k', ',', '9', 'o',
    'l', '.', '0', 'p', ';', '/', '=', ' ', 'q', 'a', 'z', '1',
];

const ETEN_KEYS: [char; 42] = [
    'b', 'p', 'm', 'f', 'd', 't', 'n', 'l', 'v', 'k', 'h', 'g', '7', 'c', ',',
    '.', '/', 'j', ';', '\'', 's', 'e', 'x', 'u', 'a', 'o', 'r', 'w', 'i', 'q',
    'z', 'y', '8', '9', '0', '-', '=', ' ', '2', '3', '4', '1',
];

const IBM_KEYS: [char; 42] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-', 'q', 'w', 'e', 'r',
    't', 'y', 'u', 'i', 'o', 'p', 'a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l',
    ';', 'z', 'x', 'c', 'v', 'b', 'n', ' ', 'm', ',', '.', '/',
];

/// The four keyboard layouts the generator emits tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Standard,
    GinYieh,
    Eten,
    Ibm,
}

impl Layout {
    pub const ALL: [Layout; 4] = [Layout::Standard, Layout::GinYieh, Layout::Eten, Layout::Ibm];

    pub fn name(self) -> &'static str {
        match self {
            Layout::Standard => "STANDARD",
            Layout::GinYieh => "GINYIEH",
            Layout::Eten => "ETEN",
            Layout::Ibm => "IBM",
        }
    }

    pub fn from_name(name: &str) -> Option<Layout> {
        Layout::ALL.into_iter().find(|l| l.name() == name)
    }

    pub fn keys(self) -> &'static [char; 42] {
        match self {
            Layout::Standard => &STANDARD_KEYS,
            Layout::GinYieh => &GIN_YIEH_KEYS,
            Layout::Eten => &ETEN_KEYS,
            Layout::Ibm => &IBM_KEYS,
        }
    }
}

/// True for glyphs in the non-tone part of the inventory.
pub fn is_glyph(ch: char) -> bool {
    BOPOMOFO_SYMBOLS[..BOPOMOFO_SYMBOLS.len() - NUM_TONES].contains(&ch)
}

/// (key, glyph) pairs for a layout's letter keys, sorted by key.
pub fn symbol_pairs(layout: Layout) -> Vec<(char, char)> {
    let keys = &layout.keys()[..BOPOMOFO_SYMBOLS.len() - NUM_TONES];
    let mut pairs: Vec<(char, char)> = keys
        .iter()
        .copied()
        .zip(BOPOMOFO_SYMBOLS.iter().copied())
        .collect();
    pairs.sort_unstable();
    pairs
}

/// (key, tone number) pairs for a layout's tone keys, sorted by key. Tones
/// are numbered 1..=5 in inventory order.
pub fn tone_pairs(layout: Layout) -> Vec<(char, usize)> {
    let keys = &layout.keys()[BOPOMOFO_SYMBOLS.len() - NUM_TONES..];
    let mut pairs: Vec<(char, usize)> = keys
        .iter()
        .copied()
        .zip(1..=NUM_TONES)
        .collect();
    pairs.sort_unstable();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_cover_every_symbol() {
        for layout in Layout::ALL {
            assert_eq!(layout.keys().len(), BOPOMOFO_SYMBOLS.len());
            // No key may be bound twice within a layout.
            let mut keys = layout.keys().to_vec();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), BOPOMOFO_SYMBOLS.len(), "{}", layout.name());
        }
    }

    #[test]
    fn symbol_pairs_sorted() {
        for layout in Layout::ALL {
            let pairs = symbol_pairs(layout);
            assert_eq!(pairs.len(), 37);
            assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }

    #[test]
    fn standard_tone_keys() {
        let tones = tone_pairs(Layout::Standard);
        assert_eq!(tones, vec![(' ', 1), ('3', 3), ('4', 4), ('6', 2), ('7', 5)]);
    }

    #[test]
    fn glyph_inventory_excludes_tones() {
        assert!(is_glyph('ㄅ'));
        assert!(is_glyph('ㄦ'));
        assert!(!is_glyph('ˊ'));
    }
}
