//! # zhuyin-tables
//!
//! Canonical, cross-referenced lookup tables mapping pinyin spellings,
//! bopomofo glyph strings and structured three-slot phonetic keys, plus the
//! keyboard-layout and correction tables used by non-standard layouts.
//!
//! The whole build is a pure function over static catalogs: `TableSet::build`
//! deduplicates, sorts and cross-indexes the canonical entry set so that any
//! of the four input notations binary-searches to the same canonical entry.
//! Rendering expands `@NAME@` placeholders in a header template with the
//! generated blocks.

pub mod symbols;
pub mod chewing;
pub mod entry;
pub mod table;
pub mod keyboard;
pub mod correct;
pub mod render;
pub mod error;

pub use chewing::{decode, ChewingKey, Final, Initial, Middle};
pub use entry::{Flags, PinyinEntry};
pub use error::TableError;
pub use keyboard::Layout;
pub use table::{IndexEntry, TableSet};
