// zhuyin-tables/src/entry.rs
//
// Canonical-entry candidates: one per catalog syllable plus one per shengmu
// fragment that is not itself a catalog key. Candidates flow unfiltered into
// the table builder; flags are derived purely from catalog membership.

use crate::chewing::{self, ChewingKey, Middle};
use crate::error::TableError;
use crate::symbols;

/// Capability flags, rendered pipe-joined in a fixed catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Spelling has a bopomofo catalog form.
    pub const IS_BOPOMOFO: Flags = Flags(1 << 0);
    /// Spelling is a valid pinyin syllable or fragment.
    pub const IS_PINYIN: Flags = Flags(1 << 1);
    /// Spelling is an initial-only fragment.
    pub const PINYIN_INCOMPLETE: Flags = Flags(1 << 2);
    /// Bopomofo form is a lone initial glyph but not a special-initial
    /// syllable, so it is underspecified in the glyph notation.
    pub const BOPOMOFO_INCOMPLETE: Flags = Flags(1 << 3);

    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [(Flags, &str); 4] = [
            (Flags::IS_BOPOMOFO, "IS_BOPOMOFO"),
            (Flags::IS_PINYIN, "IS_PINYIN"),
            (Flags::PINYIN_INCOMPLETE, "PINYIN_INCOMPLETE"),
            (Flags::BOPOMOFO_INCOMPLETE, "BOPOMOFO_INCOMPLETE"),
        ];
        if self.is_empty() {
            return write!(f, "0");
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// One canonical-entry candidate. The derived `Ord` sorts by spelling first,
/// then by the remaining fields, which makes the content sort deterministic
/// even between entries sharing a spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinyinEntry {
    pub pinyin: &'static str,
    pub bopomofo: &'static str,
    pub luoma: Option<String>,
    pub second: Option<String>,
    pub flags: Flags,
    pub key: ChewingKey,
}

impl PinyinEntry {
    /// The sentinel occupying position 0 of the content table, representing
    /// "no match" at runtime.
    pub fn sentinel() -> Self {
        Self {
            pinyin: "",
            bopomofo: "",
            luoma: None,
            second: None,
            flags: Flags::NONE,
            key: ChewingKey::zero(),
        }
    }
}

fn flags_for_catalog_entry(pinyin: &str, bopomofo: &str) -> Flags {
    let mut flags = Flags::IS_BOPOMOFO;
    if symbols::HANYU_PINYIN_LIST.contains(&pinyin) || symbols::SHENGMU_LIST.contains(&pinyin) {
        flags |= Flags::IS_PINYIN;
    }
    if symbols::SHENGMU_LIST.contains(&pinyin) {
        flags |= Flags::PINYIN_INCOMPLETE;
    }
    let mut glyphs = bopomofo.chars();
    let lone_initial = matches!(
        (glyphs.next().map(chewing::Initial::from_glyph), glyphs.next()),
        (Some(Some(_)), None)
    );
    if lone_initial && !symbols::SPECIAL_INITIAL_SET.contains(&pinyin) {
        flags |= Flags::BOPOMOFO_INCOMPLETE;
    }
    flags
}

fn alternates(bopomofo: &str) -> (Option<String>, Option<String>) {
    let luoma = symbols::BOPOMOFO_LUOMA_PINYIN_MAP.get(bopomofo).cloned();
    let second = symbols::BOPOMOFO_SECONDARY_BOPOMOFO_MAP.get(bopomofo).cloned();
    (luoma, second)
}

/// Produce the raw, pre-dedup candidate sequence.
pub fn generate_entries() -> Result<Vec<PinyinEntry>, TableError> {
    let mut keys: Vec<&'static str> = symbols::HANYU_PINYIN_BOPOMOFO_MAP
        .keys()
        .copied()
        .collect();
    keys.sort_unstable();

    let mut entries = Vec::with_capacity(keys.len() + symbols::SHENGMU_LIST.len());

    for pinyin in keys {
        let bopomofo = symbols::HANYU_PINYIN_BOPOMOFO_MAP[pinyin];
        let (luoma, second) = alternates(bopomofo);
        entries.push(PinyinEntry {
            pinyin,
            bopomofo,
            luoma,
            second,
            flags: flags_for_catalog_entry(pinyin, bopomofo),
            key: chewing::decode(pinyin)?,
        });
    }

    for &fragment in symbols::SHENGMU_LIST {
        if symbols::HANYU_PINYIN_BOPOMOFO_MAP.contains_key(fragment) {
            continue;
        }
        let initial = chewing::initial_for_shengmu(fragment)?;
        // w and y have no initial glyph; show their medial glyph instead.
        let bopomofo = match initial.glyph_str() {
            Some(glyph) => glyph,
            None => match fragment {
                "w" => "ㄨ",
                "y" => "ㄧ",
                _ => {
                    return Err(TableError::UnknownShengmu {
                        fragment: fragment.to_string(),
                    })
                }
            },
        };
        // Fragments carry no alternate romanizations; those belong to the
        // full syllables that own the glyph forms.
        entries.push(PinyinEntry {
            pinyin: fragment,
            bopomofo,
            luoma: None,
            second: None,
            flags: Flags::IS_PINYIN | Flags::PINYIN_INCOMPLETE,
            key: ChewingKey::new(initial, Middle::Zero, chewing::Final::Zero),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_render_pipe_joined() {
        let flags = Flags::IS_BOPOMOFO | Flags::IS_PINYIN | Flags::PINYIN_INCOMPLETE;
        assert_eq!(flags.to_string(), "IS_BOPOMOFO | IS_PINYIN | PINYIN_INCOMPLETE");
        assert_eq!(Flags::NONE.to_string(), "0");
    }

    #[test]
    fn full_syllable_flags() {
        let entries = generate_entries().unwrap();
        let zhang = entries.iter().find(|e| e.pinyin == "zhang").unwrap();
        assert_eq!(zhang.flags, Flags::IS_BOPOMOFO | Flags::IS_PINYIN);
        assert_eq!(zhang.bopomofo, "ㄓㄤ");
        assert!(zhang.luoma.is_some());
    }

    #[test]
    fn fragment_flags() {
        let entries = generate_entries().unwrap();
        let zh = entries.iter().find(|e| e.pinyin == "zh").unwrap();
        assert!(zh.flags.contains(Flags::PINYIN_INCOMPLETE));
        assert!(zh.flags.contains(Flags::BOPOMOFO_INCOMPLETE));
        // zhi is a complete syllable despite its lone-glyph form.
        let zhi = entries.iter().find(|e| e.pinyin == "zhi").unwrap();
        assert!(!zhi.flags.contains(Flags::BOPOMOFO_INCOMPLETE));
    }

    #[test]
    fn w_y_fragments_present_once() {
        let entries = generate_entries().unwrap();
        let w: Vec<_> = entries.iter().filter(|e| e.pinyin == "w").collect();
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].bopomofo, "ㄨ");
        assert!(!w[0].flags.contains(Flags::IS_BOPOMOFO));
        assert!(w[0].luoma.is_none() && w[0].second.is_none());
        let y = entries.iter().find(|e| e.pinyin == "y").unwrap();
        assert_eq!(y.bopomofo, "ㄧ");
        assert!(y.luoma.is_none() && y.second.is_none());
    }

    #[test]
    fn fragments_do_not_duplicate_catalog_keys() {
        let entries = generate_entries().unwrap();
        let mut spellings: Vec<_> = entries.iter().map(|e| e.pinyin).collect();
        let before = spellings.len();
        spellings.sort_unstable();
        spellings.dedup();
        assert_eq!(before, spellings.len());
    }
}
