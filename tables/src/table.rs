// zhuyin-tables/src/table.rs
//
// The table builder: dedup, sort, sentinel, and the four index projections
// resolved against the canonical content table. All state is local to the
// build; the returned TableSet is immutable and building twice from the same
// catalogs yields identical tables.

use crate::entry::{generate_entries, Flags, PinyinEntry};
use crate::error::TableError;
use crate::symbols;

/// One index row: a lookup string resolved to a content-table position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub key: String,
    pub flags: Flags,
    pub pos: usize,
}

/// The canonical content table plus its four sorted index tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSet {
    pub content: Vec<PinyinEntry>,
    pub hanyu_index: Vec<IndexEntry>,
    pub luoma_index: Vec<IndexEntry>,
    pub bopomofo_index: Vec<IndexEntry>,
    pub second_index: Vec<IndexEntry>,
}

fn resolve(
    mut raw: Vec<(String, Flags)>,
    content: &[PinyinEntry],
    table: &str,
    field: impl Fn(&PinyinEntry) -> Option<&str>,
) -> Result<Vec<IndexEntry>, TableError> {
    raw.sort_unstable();
    raw.dedup();
    raw.into_iter()
        .map(|(key, flags)| {
            let pos = content
                .iter()
                .position(|e| field(e) == Some(key.as_str()))
                .ok_or_else(|| TableError::Unresolved {
                    table: table.to_string(),
                    key: key.clone(),
                })?;
            Ok(IndexEntry { key, flags, pos })
        })
        .collect()
}

impl TableSet {
    /// Build the full table set from the static catalogs.
    pub fn build() -> Result<TableSet, TableError> {
        symbols::check_catalog()?;
        let entries = generate_entries()?;

        let mut hanyu: Vec<(String, Flags)> = Vec::new();
        let mut luoma: Vec<(String, Flags)> = Vec::new();
        let mut bopomofo: Vec<(String, Flags)> = Vec::new();
        let mut second: Vec<(String, Flags)> = Vec::new();

        for e in &entries {
            if e.flags.contains(Flags::IS_PINYIN) {
                hanyu.push((e.pinyin.to_string(), e.flags));
            }
            if let Some(l) = &e.luoma {
                luoma.push((l.clone(), Flags::IS_PINYIN));
            }
            if e.flags.contains(Flags::IS_BOPOMOFO) {
                bopomofo.push((e.bopomofo.to_string(), e.flags));
            }
            if let Some(s) = &e.second {
                second.push((s.clone(), Flags::IS_PINYIN));
            }
        }

        let mut content = entries;
        content.sort_unstable();
        content.dedup();
        content.insert(0, PinyinEntry::sentinel());

        let hanyu_index = resolve(hanyu, &content, "HANYU_PINYIN_INDEX", |e| {
            Some(e.pinyin)
        })?;
        let luoma_index = resolve(luoma, &content, "LUOMA_PINYIN_INDEX", |e| {
            e.luoma.as_deref()
        })?;
        // A bopomofo form shared between rows (zh/zhi, or the w/y fragments
        // reusing ㄨ/ㄧ) belongs to the spelling the reverse map names.
        let bopomofo_index = resolve(bopomofo, &content, "BOPOMOFO_INDEX", |e| {
            (symbols::BOPOMOFO_HANYU_PINYIN_MAP.get(e.bopomofo) == Some(&e.pinyin))
                .then_some(e.bopomofo)
        })?;
        let second_index = resolve(second, &content, "SECONDARY_BOPOMOFO_INDEX", |e| {
            e.second.as_deref()
        })?;

        Ok(TableSet {
            content,
            hanyu_index,
            luoma_index,
            bopomofo_index,
            second_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_occupies_position_zero() {
        let tables = TableSet::build().unwrap();
        assert_eq!(tables.content[0], PinyinEntry::sentinel());
        // The empty sentinel never resolves an index key.
        for idx in [&tables.hanyu_index, &tables.bopomofo_index] {
            assert!(idx.iter().all(|e| e.pos != 0));
        }
    }

    #[test]
    fn content_sorted_and_unique() {
        let tables = TableSet::build().unwrap();
        let body = &tables.content[1..];
        assert!(body.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unresolved_key_is_reported() {
        let tables = TableSet::build().unwrap();
        let err = resolve(
            vec![("nope".to_string(), Flags::IS_PINYIN)],
            &tables.content,
            "HANYU_PINYIN_INDEX",
            |e| Some(e.pinyin),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::Unresolved {
                table: "HANYU_PINYIN_INDEX".to_string(),
                key: "nope".to_string(),
            }
        );
    }
}
