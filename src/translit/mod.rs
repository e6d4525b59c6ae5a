//! Hebrew-to-Latin transliteration.
//!
//! The runtime stores wordlists in a fixed Latin alphabet and translates
//! user keystrokes through the same mapping, so the build and the runtime
//! must agree on one table. The table is loaded from TOML (embedded default
//! or a custom file) and passed explicitly into every pipeline stage.

mod config;
mod table;

pub use config::{parse_table_toml, TranslitConfigError};

use std::collections::BTreeMap;

use crate::script::{is_hebrew, GERESH};

/// Returns the embedded default mapping table as TOML.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}

/// Forward and derived inverse mapping between Hebrew graphemes and Latin
/// letters.
///
/// The forward mapping is many-to-one (final forms and geresh digraphs share
/// a target letter), so the inverse picks one canonical source form per
/// Latin letter.
pub struct TranslitTable {
    forward: BTreeMap<String, String>,
    inverse: BTreeMap<String, String>,
}

impl TranslitTable {
    /// Build a table from TOML text, validating keys and values.
    pub fn from_toml(toml_str: &str) -> Result<Self, TranslitConfigError> {
        Ok(Self::from_mappings(parse_table_toml(toml_str)?))
    }

    fn from_mappings(forward: BTreeMap<String, String>) -> Self {
        // Digraph keys are skipped and the lexicographically last source form
        // wins. Final forms sort before their base letters in the Hebrew
        // block, so each Latin letter inverts to the base form.
        let mut inverse = BTreeMap::new();
        for (grapheme, latin) in &forward {
            if grapheme.chars().count() == 1 {
                inverse.insert(latin.clone(), grapheme.clone());
            }
        }
        TranslitTable { forward, inverse }
    }

    /// Replace every mapped Hebrew grapheme in `input` with its Latin letter.
    ///
    /// A Hebrew character and an immediately following geresh form one
    /// cluster, looked up as a unit; a cluster without a table entry passes
    /// through unchanged as a unit, as does any non-Hebrew character. Never
    /// fails.
    pub fn transliterate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut iter = input.char_indices().peekable();
        while let Some((start, c)) = iter.next() {
            if !is_hebrew(c) {
                out.push(c);
                continue;
            }
            let mut end = start + c.len_utf8();
            if let Some(&(_, next)) = iter.peek() {
                if next == GERESH {
                    iter.next();
                    end += GERESH.len_utf8();
                }
            }
            let cluster = &input[start..end];
            match self.forward.get(cluster) {
                Some(latin) => out.push_str(latin),
                None => out.push_str(cluster),
            }
        }
        out
    }

    pub fn forward(&self) -> &BTreeMap<String, String> {
        &self.forward
    }

    pub fn inverse(&self) -> &BTreeMap<String, String> {
        &self.inverse
    }
}

impl Default for TranslitTable {
    fn default() -> Self {
        Self::from_toml(table::DEFAULT_TOML).expect("default table TOML must be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_word() {
        let table = TranslitTable::default();
        assert_eq!(table.transliterate("שלום"), "Slvm");
    }

    #[test]
    fn test_final_forms_share_target() {
        let table = TranslitTable::default();
        assert_eq!(table.transliterate("כך"), "cc");
        assert_eq!(table.transliterate("מם"), "mm");
        assert_eq!(table.transliterate("צץ"), "ww");
    }

    #[test]
    fn test_mapped_digraph() {
        let table = TranslitTable::default();
        // ג' carries its own entry and must be consumed as one cluster.
        assert_eq!(table.transliterate("ג'ירפה"), "gyrph");
    }

    #[test]
    fn test_digraph_never_split() {
        // With a digraph target that differs from the base letter's, a split
        // substitution would be observable.
        let toml = r#"
[mappings]
"ג" = "g"
"ג'" = "j"
"#;
        let table = TranslitTable::from_toml(toml).unwrap();
        assert_eq!(table.transliterate("ג'ג"), "jg");
    }

    #[test]
    fn test_unmapped_digraph_passes_through_whole() {
        let table = TranslitTable::default();
        // ד maps but ד' has no entry: the cluster stays untouched rather
        // than falling back to the bare-letter substitution.
        assert_eq!(table.transliterate("ד'"), "ד'");
    }

    #[test]
    fn test_unmapped_input_unchanged() {
        let table = TranslitTable::default();
        assert_eq!(table.transliterate("hello, world 123!"), "hello, world 123!");
        assert_eq!(table.transliterate(""), "");
    }

    #[test]
    fn test_unmapped_hebrew_codepoint_passes_through() {
        let table = TranslitTable::default();
        // Maqaf is inside the Hebrew block but has no mapping.
        assert_eq!(table.transliterate("בית\u{05BE}ספר"), "byt\u{05BE}spr");
    }

    #[test]
    fn test_bare_geresh_passes_through() {
        let table = TranslitTable::default();
        assert_eq!(table.transliterate("'"), "'");
        assert_eq!(table.transliterate("a'b"), "a'b");
    }

    #[test]
    fn test_deterministic() {
        let table = TranslitTable::default();
        let input = "ז'רגון של צ'יפס";
        assert_eq!(table.transliterate(input), table.transliterate(input));
    }

    #[test]
    fn test_inverse_prefers_base_forms() {
        let table = TranslitTable::default();
        let inverse = table.inverse();
        assert_eq!(inverse["c"], "כ");
        assert_eq!(inverse["m"], "מ");
        assert_eq!(inverse["n"], "נ");
        assert_eq!(inverse["p"], "פ");
        assert_eq!(inverse["w"], "צ");
    }

    #[test]
    fn test_inverse_skips_digraphs() {
        let table = TranslitTable::default();
        assert_eq!(table.inverse().len(), 22);
        assert!(table.inverse().values().all(|v| v.chars().count() == 1));
    }

    #[test]
    fn test_all_mappings_roundtrip() {
        let table = TranslitTable::default();
        for (grapheme, latin) in table.forward() {
            assert_eq!(
                &table.transliterate(grapheme),
                latin,
                "mapping mismatch for grapheme={grapheme}"
            );
        }
    }
}
