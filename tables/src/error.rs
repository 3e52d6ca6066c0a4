use thiserror::Error;

/// Errors raised while building or rendering the lookup tables.
///
/// Every variant names the offending key: all of these are defects in the
/// static catalogs or templates, not runtime conditions, and abort the build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A declared pinyin spelling has no bopomofo mapping.
    #[error("no bopomofo mapping for pinyin syllable '{pinyin}'")]
    MissingBopomofo { pinyin: String },

    /// A shengmu fragment maps onto no known initial class.
    #[error("shengmu fragment '{fragment}' has no initial glyph")]
    UnknownShengmu { fragment: String },

    /// An index lookup key matched no canonical entry.
    #[error("index key '{key}' unresolved in {table}")]
    Unresolved { table: String, key: String },

    /// Wildcard-suffix usage differs between the two sides of a rule.
    #[error("malformed correction rule: correct '{correct}' vs wrong '{wrong}'")]
    MalformedRule { correct: String, wrong: String },

    /// A correction or switch rule references a glyph outside the catalog.
    #[error("rule pattern '{pattern}' uses glyph '{glyph}' not in the symbol inventory")]
    UnknownGlyph { pattern: String, glyph: char },

    /// A template requested a table this generator does not produce.
    #[error("unknown table placeholder '{name}'")]
    UnknownPlaceholder { name: String },
}
