pub mod data;

pub use data::TABLES;

use phf::Map;

/// A single immutable key → replacement table.
///
/// Keys are one to three Unicode scalar values; lookups are by `&str` so the
/// scanner can probe any window of the input without allocating per probe.
#[derive(Clone, Copy, Debug)]
pub struct RuleTable {
    pub name: &'static str,
    pub map: &'static Map<&'static str, &'static str>,
}

impl RuleTable {
    #[inline(always)]
    pub const fn new(name: &'static str, map: &'static Map<&'static str, &'static str>) -> Self {
        Self { name, map }
    }

    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.map.get(key).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Longest key, counted in scalar values.
    #[inline]
    pub fn max_key_len(&self) -> usize {
        self.map
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0)
    }

    #[inline]
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.map.entries().map(|(k, v)| (*k, *v))
    }
}

/// The six mapping tables used by both translation directions.
///
/// Deliberately tiny and `Copy`: every field is a `'static` reference into
/// data compiled into the binary, so handing a `Tables` around costs nothing.
#[derive(Clone, Copy, Debug)]
pub struct Tables {
    /// `a`–`z` → Javanese letter.
    pub latin_to_javanese: RuleTable,
    /// Javanese letter (one or two scalars) → `a`–`z`.
    pub javanese_to_latin: RuleTable,
    /// `ng`, `ny`, `th`, `dh` → single Javanese consonant.
    pub consonant_digraphs: RuleTable,
    /// Vowel combinations and digraph consonants → Latin.
    pub javanese_compounds: RuleTable,
    /// Latin vowel → standalone vowel sign.
    pub vowel_diacritics: RuleTable,
    /// Brackets and sentence punctuation → Javanese punctuation.
    pub special_characters: RuleTable,
}

impl Default for Tables {
    #[inline(always)]
    fn default() -> Self {
        TABLES
    }
}

impl Tables {
    pub fn all(&self) -> [RuleTable; 6] {
        [
            self.latin_to_javanese,
            self.javanese_to_latin,
            self.consonant_digraphs,
            self.javanese_compounds,
            self.vowel_diacritics,
            self.special_characters,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(TABLES.latin_to_javanese.len(), 26);
        assert_eq!(TABLES.javanese_to_latin.len(), 26);
        assert_eq!(TABLES.consonant_digraphs.len(), 4);
        assert_eq!(TABLES.javanese_compounds.len(), 8);
        assert_eq!(TABLES.vowel_diacritics.len(), 5);
        assert_eq!(TABLES.special_characters.len(), 6);
    }

    #[test]
    fn key_lengths() {
        assert_eq!(TABLES.latin_to_javanese.max_key_len(), 1);
        assert_eq!(TABLES.javanese_to_latin.max_key_len(), 2);
        assert_eq!(TABLES.consonant_digraphs.max_key_len(), 2);
        assert_eq!(TABLES.javanese_compounds.max_key_len(), 3);
        assert_eq!(TABLES.vowel_diacritics.max_key_len(), 1);
        assert_eq!(TABLES.special_characters.max_key_len(), 1);
    }

    #[test]
    fn digraph_keys_are_exactly_two_letters() {
        for (k, _) in TABLES.consonant_digraphs.entries() {
            assert_eq!(k.chars().count(), 2, "digraph key {k:?}");
        }
    }

    #[test]
    fn base_tables_are_mutual_inverses() {
        let fwd = TABLES.latin_to_javanese;
        let rev = TABLES.javanese_to_latin;
        for (latin, java) in fwd.entries() {
            assert_eq!(rev.get(java), Some(latin), "{latin} → {java}");
        }
    }

    #[test]
    fn digraph_consonants_round_trip_through_compounds() {
        for (latin, java) in TABLES.consonant_digraphs.entries() {
            assert_eq!(TABLES.javanese_compounds.get(java), Some(latin));
        }
    }

    #[test]
    fn brackets_share_one_glyph() {
        let sc = TABLES.special_characters;
        let glyph = sc.get("(").unwrap();
        for k in [")", "[", "]"] {
            assert_eq!(sc.get(k), Some(glyph));
        }
        assert_eq!(glyph, "\u{A9C0}");
    }

    #[test]
    fn every_table_value_is_non_empty() {
        for t in Tables::default().all() {
            assert!(!t.is_empty(), "{}", t.name);
            for (k, v) in t.entries() {
                assert!(!k.is_empty() && !v.is_empty(), "{}: {k:?}", t.name);
            }
        }
    }
}
