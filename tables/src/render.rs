// zhuyin-tables/src/render.rs
//
// Serializes built tables into the destination-language text blocks and
// expands `@NAME@` template placeholders. Field strings are escaped as C
// literals; the structured key renders through its Display impl.

use crate::keyboard::{self, Layout};
use crate::table::{IndexEntry, TableSet};
use crate::error::TableError;

/// Escape a key character as a C char literal; `'` and `\` are
/// backslash-escaped.
pub fn escape_key(key: char) -> String {
    match key {
        '\'' | '\\' => format!("'\\{key}'"),
        _ => format!("'{key}'"),
    }
}

/// The canonical content table, one `{...}` literal per entry. Absent
/// alternate forms render as empty strings.
pub fn content_table(tables: &TableSet) -> String {
    let rows: Vec<String> = tables
        .content
        .iter()
        .map(|e| {
            format!(
                "{{\"{}\", \"{}\", \"{}\", \"{}\", {}}}",
                e.pinyin,
                e.bopomofo,
                e.luoma.as_deref().unwrap_or(""),
                e.second.as_deref().unwrap_or(""),
                e.key
            )
        })
        .collect();
    rows.join(",\n")
}

/// One sorted index table: lookup key, pipe-joined flags, resolved position.
pub fn index_table(index: &[IndexEntry]) -> String {
    let rows: Vec<String> = index
        .iter()
        .map(|e| format!("{{\"{}\", {}, {}}}", e.key, e.flags, e.pos))
        .collect();
    rows.join(",\n")
}

/// A layout's letter-key table, sorted by key and terminated by a sentinel.
pub fn keyboard_symbols(layout: Layout) -> String {
    let mut rows: Vec<String> = keyboard::symbol_pairs(layout)
        .into_iter()
        .map(|(key, glyph)| format!("{{{:<5}, \"{}\"}}", escape_key(key), glyph))
        .collect();
    rows.push("{'\\0', NULL}".to_string());
    rows.join(",\n")
}

/// A layout's tone-key table, sorted by key and terminated by a sentinel.
pub fn keyboard_tones(layout: Layout) -> String {
    let mut rows: Vec<String> = keyboard::tone_pairs(layout)
        .into_iter()
        .map(|(key, tone)| format!("{{{:<5}, {}}}", escape_key(key), tone))
        .collect();
    rows.push("{'\\0', 0}".to_string());
    rows.join(",\n")
}

/// Expand a template: a line consisting of `@NAME@` is replaced by the block
/// the resolver returns for NAME; every other line passes through verbatim.
/// A name the resolver does not know is a template defect.
pub fn expand_template(
    template: &str,
    resolve: impl Fn(&str) -> Option<String>,
) -> Result<String, TableError> {
    let mut out = String::new();
    for line in template.lines() {
        let trimmed = line.trim();
        if trimmed.len() > 2 && trimmed.starts_with('@') && trimmed.ends_with('@') {
            let name = &trimmed[1..trimmed.len() - 1];
            let block = resolve(name).ok_or_else(|| TableError::UnknownPlaceholder {
                name: name.to_string(),
            })?;
            out.push_str(&block);
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_escaping() {
        assert_eq!(escape_key('q'), "'q'");
        assert_eq!(escape_key('\''), "'\\''");
        assert_eq!(escape_key('\\'), "'\\\\'");
    }

    #[test]
    fn content_rows_quote_fields() {
        let tables = TableSet::build().unwrap();
        let text = content_table(&tables);
        let mut lines = text.lines();
        // Sentinel first, then the sorted body.
        assert_eq!(lines.next().unwrap(), "{\"\", \"\", \"\", \"\", ChewingKey()},");
        assert!(text.contains(
            "{\"zhang\", \"ㄓㄤ\", \"tsang\", \"jang\", \
             ChewingKey(CHEWING_ZH, CHEWING_ZERO_MIDDLE, CHEWING_ANG)}"
        ));
    }

    #[test]
    fn eten_symbols_include_apostrophe_key() {
        let text = keyboard_symbols(Layout::Eten);
        assert!(text.contains("'\\''"));
        assert!(text.trim_end().ends_with("{'\\0', NULL}"));
    }

    #[test]
    fn template_expansion() {
        let out = expand_template("head\n@BLOCK@\ntail\n", |name| {
            (name == "BLOCK").then(|| "a,\nb".to_string())
        })
        .unwrap();
        assert_eq!(out, "head\na,\nb\ntail\n");
    }

    #[test]
    fn unknown_placeholder_is_fatal() {
        let err = expand_template("@NOPE@\n", |_| None).unwrap_err();
        assert_eq!(
            err,
            TableError::UnknownPlaceholder {
                name: "NOPE".to_string()
            }
        );
    }
}
