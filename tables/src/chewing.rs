// zhuyin-tables/src/chewing.rs
//
// The structured three-slot phonetic key ("chewing key") consumed by the
// runtime engine, and the decoder that derives one from a pinyin spelling by
// scanning its bopomofo form.
//
// Each slot is a closed enum so the glyph classification is checked at
// compile time; the slot identifiers rendered into the generated tables match
// the runtime engine's constant names (CHEWING_* / PINYIN_*).

use crate::error::TableError;
use crate::symbols;

/// Initial consonant class. `W` and `Y` have no bopomofo glyph; they are
/// assigned straight from the spelling's leading character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Initial {
    Zero,
    B,
    P,
    M,
    F,
    D,
    T,
    N,
    L,
    G,
    K,
    H,
    J,
    Q,
    X,
    Zh,
    Ch,
    Sh,
    R,
    Z,
    C,
    S,
    W,
    Y,
}

impl Initial {
    pub fn from_glyph(glyph: char) -> Option<Initial> {
        Some(match glyph {
            'ㄅ' => Initial::B,
            'ㄆ' => Initial::P,
            'ㄇ' => Initial::M,
            'ㄈ' => Initial::F,
            'ㄉ' => Initial::D,
            'ㄊ' => Initial::T,
            'ㄋ' => Initial::N,
            'ㄌ' => Initial::L,
            'ㄍ' => Initial::G,
            'ㄎ' => Initial::K,
            'ㄏ' => Initial::H,
            'ㄐ' => Initial::J,
            'ㄑ' => Initial::Q,
            'ㄒ' => Initial::X,
            'ㄓ' => Initial::Zh,
            'ㄔ' => Initial::Ch,
            'ㄕ' => Initial::Sh,
            'ㄖ' => Initial::R,
            'ㄗ' => Initial::Z,
            'ㄘ' => Initial::C,
            'ㄙ' => Initial::S,
            _ => return None,
        })
    }

    /// The initial's own bopomofo glyph; `None` for `Zero`, `W` and `Y`.
    pub fn glyph_str(self) -> Option<&'static str> {
        Some(match self {
            Initial::B => "ㄅ",
            Initial::P => "ㄆ",
            Initial::M => "ㄇ",
            Initial::F => "ㄈ",
            Initial::D => "ㄉ",
            Initial::T => "ㄊ",
            Initial::N => "ㄋ",
            Initial::L => "ㄌ",
            Initial::G => "ㄍ",
            Initial::K => "ㄎ",
            Initial::H => "ㄏ",
            Initial::J => "ㄐ",
            Initial::Q => "ㄑ",
            Initial::X => "ㄒ",
            Initial::Zh => "ㄓ",
            Initial::Ch => "ㄔ",
            Initial::Sh => "ㄕ",
            Initial::R => "ㄖ",
            Initial::Z => "ㄗ",
            Initial::C => "ㄘ",
            Initial::S => "ㄙ",
            Initial::Zero | Initial::W | Initial::Y => return None,
        })
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Initial::Zero => "CHEWING_ZERO_INITIAL",
            Initial::B => "CHEWING_B",
            Initial::P => "CHEWING_P",
            Initial::M => "CHEWING_M",
            Initial::F => "CHEWING_F",
            Initial::D => "CHEWING_D",
            Initial::T => "CHEWING_T",
            Initial::N => "CHEWING_N",
            Initial::L => "CHEWING_L",
            Initial::G => "CHEWING_G",
            Initial::K => "CHEWING_K",
            Initial::H => "CHEWING_H",
            Initial::J => "CHEWING_J",
            Initial::Q => "CHEWING_Q",
            Initial::X => "CHEWING_X",
            Initial::Zh => "CHEWING_ZH",
            Initial::Ch => "CHEWING_CH",
            Initial::Sh => "CHEWING_SH",
            Initial::R => "CHEWING_R",
            Initial::Z => "CHEWING_Z",
            Initial::C => "CHEWING_C",
            Initial::S => "CHEWING_S",
            Initial::W => "PINYIN_W",
            Initial::Y => "PINYIN_Y",
        }
    }
}

/// Medial glide class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Middle {
    Zero,
    I,
    U,
    V,
}

impl Middle {
    pub fn from_glyph(glyph: char) -> Option<Middle> {
        Some(match glyph {
            'ㄧ' => Middle::I,
            'ㄨ' => Middle::U,
            'ㄩ' => Middle::V,
            _ => return None,
        })
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Middle::Zero => "CHEWING_ZERO_MIDDLE",
            Middle::I => "CHEWING_I",
            Middle::U => "CHEWING_U",
            Middle::V => "CHEWING_V",
        }
    }
}

/// Final class. `Ong`, `In` and `Ing` exist only in the pinyin notation and
/// are produced by the post-processing rules, never by a glyph directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Final {
    Zero,
    A,
    O,
    E,
    Ai,
    Ei,
    Ao,
    Ou,
    An,
    En,
    Ang,
    Eng,
    Er,
    Ong,
    In,
    Ing,
}

impl Final {
    pub fn from_glyph(glyph: char) -> Option<Final> {
        Some(match glyph {
            'ㄚ' => Final::A,
            'ㄛ' => Final::O,
            // ㄝ and ㄜ are merged into one final class.
            'ㄜ' | 'ㄝ' => Final::E,
            'ㄞ' => Final::Ai,
            'ㄟ' => Final::Ei,
            'ㄠ' => Final::Ao,
            'ㄡ' => Final::Ou,
            'ㄢ' => Final::An,
            'ㄣ' => Final::En,
            'ㄤ' => Final::Ang,
            'ㄥ' => Final::Eng,
            'ㄦ' => Final::Er,
            _ => return None,
        })
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Final::Zero => "CHEWING_ZERO_FINAL",
            Final::A => "CHEWING_A",
            Final::O => "CHEWING_O",
            Final::E => "CHEWING_E",
            Final::Ai => "CHEWING_AI",
            Final::Ei => "CHEWING_EI",
            Final::Ao => "CHEWING_AO",
            Final::Ou => "CHEWING_OU",
            Final::An => "CHEWING_AN",
            Final::En => "CHEWING_EN",
            Final::Ang => "CHEWING_ANG",
            Final::Eng => "CHEWING_ENG",
            Final::Er => "CHEWING_ER",
            Final::Ong => "PINYIN_ONG",
            Final::In => "PINYIN_IN",
            Final::Ing => "PINYIN_ING",
        }
    }
}

/// The three-slot phonetic key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChewingKey {
    pub initial: Initial,
    pub middle: Middle,
    pub fin: Final,
}

impl ChewingKey {
    pub const fn new(initial: Initial, middle: Middle, fin: Final) -> Self {
        Self {
            initial,
            middle,
            fin,
        }
    }

    /// The all-zero key, reserved for the sentinel entry at position 0.
    pub const fn zero() -> Self {
        Self::new(Initial::Zero, Middle::Zero, Final::Zero)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl std::fmt::Display for ChewingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            write!(f, "ChewingKey()")
        } else {
            write!(
                f,
                "ChewingKey({}, {}, {})",
                self.initial.identifier(),
                self.middle.identifier(),
                self.fin.identifier()
            )
        }
    }
}

/// Ambiguous (medial, final) pairs: romanized endings that read as a
/// medial+final glyph sequence but denote a single pinyin final. Exactly
/// these four combinations are rewritten; everything else passes through.
fn post_process(middle: Middle, fin: Final) -> (Middle, Final) {
    match (middle, fin) {
        // "ueng"/"ong"
        (Middle::U, Final::Eng) => (Middle::Zero, Final::Ong),
        // "veng"/"iong"
        (Middle::V, Final::Eng) => (Middle::I, Final::Ong),
        // "ien"/"in"
        (Middle::I, Final::En) => (Middle::Zero, Final::In),
        // "ieng"/"ing"
        (Middle::I, Final::Eng) => (Middle::Zero, Final::Ing),
        other => other,
    }
}

/// Decode a pinyin spelling into its structured key.
///
/// The spelling must be present in the pinyin-to-bopomofo catalog; a miss is
/// a catalog defect, not a recoverable condition.
pub fn decode(pinyin: &str) -> Result<ChewingKey, TableError> {
    let mut initial = Initial::Zero;
    let mut middle = Middle::Zero;
    let mut fin = Final::Zero;

    match pinyin.as_bytes().first() {
        Some(b'w') => initial = Initial::W,
        Some(b'y') => initial = Initial::Y,
        _ => {}
    }

    let bopomofo = symbols::HANYU_PINYIN_BOPOMOFO_MAP
        .get(pinyin)
        .copied()
        .ok_or_else(|| TableError::MissingBopomofo {
            pinyin: pinyin.to_string(),
        })?;

    // These syllables carry an implicit medial their glyph form does not write.
    if symbols::SPECIAL_INITIAL_SET.contains(&pinyin) {
        middle = Middle::I;
    }

    for glyph in bopomofo.chars() {
        if let Some(i) = Initial::from_glyph(glyph) {
            initial = i;
        }
        if let Some(m) = Middle::from_glyph(glyph) {
            middle = m;
        }
        if let Some(f) = Final::from_glyph(glyph) {
            fin = f;
        }
    }

    let (middle, fin) = post_process(middle, fin);
    Ok(ChewingKey::new(initial, middle, fin))
}

/// Map a shengmu fragment to its initial class.
///
/// Fragments with a bopomofo glyph take that glyph's class; `w` and `y` take
/// their spelling-derived classes. Anything else violates the catalog
/// precondition and is reported, not guessed at.
pub fn initial_for_shengmu(fragment: &str) -> Result<Initial, TableError> {
    let initial = match fragment {
        "b" => Initial::B,
        "p" => Initial::P,
        "m" => Initial::M,
        "f" => Initial::F,
        "d" => Initial::D,
        "t" => Initial::T,
        "n" => Initial::N,
        "l" => Initial::L,
        "g" => Initial::G,
        "k" => Initial::K,
        "h" => Initial::H,
        "j" => Initial::J,
        "q" => Initial::Q,
        "x" => Initial::X,
        "zh" => Initial::Zh,
        "ch" => Initial::Ch,
        "sh" => Initial::Sh,
        "r" => Initial::R,
        "z" => Initial::Z,
        "c" => Initial::C,
        "s" => Initial::S,
        "w" => Initial::W,
        "y" => Initial::Y,
        _ => {
            return Err(TableError::UnknownShengmu {
                fragment: fragment.to_string(),
            })
        }
    };
    Ok(initial)
}
