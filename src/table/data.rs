//! Static mapping data for Latin ⇄ Aksara Jawa.
//!
//! Every table is a compile-time perfect hash map. Trailing comments give the
//! code points of the Javanese side.
use crate::table::{RuleTable, Tables};

use phf::{Map, phf_map};

/// Latin base letters.
pub static LATIN_TO_JAVANESE: Map<&'static str, &'static str> = phf_map! {
    "a" => "ꦲ", // U+A9B2
    "b" => "ꦧ", // U+A9A7
    "c" => "ꦕ", // U+A995
    "d" => "ꦢ", // U+A9A2
    "e" => "ꦺ", // U+A9BA
    "f" => "ꦥ꦳", // U+A9A5 U+A9B3
    "g" => "ꦒ", // U+A992
    "h" => "ꦲꦃ", // U+A9B2 U+A983
    "i" => "ꦶ", // U+A9B6
    "j" => "ꦗ", // U+A997
    "k" => "ꦏ", // U+A98F
    "l" => "ꦭ", // U+A9AD
    "m" => "ꦩ", // U+A9A9
    "n" => "ꦤ", // U+A9A4
    "o" => "ꦺꦴ", // U+A9BA U+A9B4
    "p" => "ꦥ", // U+A9A5
    "q" => "ꦐ", // U+A990
    "r" => "ꦫ", // U+A9AB
    "s" => "ꦱ", // U+A9B1
    "t" => "ꦠ", // U+A9A0
    "u" => "ꦸ", // U+A9B8
    "v" => "ꦮ꦳", // U+A9AE U+A9B3
    "w" => "ꦮ", // U+A9AE
    "x" => "ꦼ", // U+A9BC
    "y" => "ꦪ", // U+A9AA
    "z" => "ꦗ꦳", // U+A997 U+A9B3
};

/// Inverse of [`LATIN_TO_JAVANESE`].
pub static JAVANESE_TO_LATIN: Map<&'static str, &'static str> = phf_map! {
    "ꦲ" => "a", // U+A9B2
    "ꦧ" => "b", // U+A9A7
    "ꦕ" => "c", // U+A995
    "ꦢ" => "d", // U+A9A2
    "ꦺ" => "e", // U+A9BA
    "ꦥ꦳" => "f", // U+A9A5 U+A9B3
    "ꦒ" => "g", // U+A992
    "ꦲꦃ" => "h", // U+A9B2 U+A983
    "ꦶ" => "i", // U+A9B6
    "ꦗ" => "j", // U+A997
    "ꦏ" => "k", // U+A98F
    "ꦭ" => "l", // U+A9AD
    "ꦩ" => "m", // U+A9A9
    "ꦤ" => "n", // U+A9A4
    "ꦺꦴ" => "o", // U+A9BA U+A9B4
    "ꦥ" => "p", // U+A9A5
    "ꦐ" => "q", // U+A990
    "ꦫ" => "r", // U+A9AB
    "ꦱ" => "s", // U+A9B1
    "ꦠ" => "t", // U+A9A0
    "ꦸ" => "u", // U+A9B8
    "ꦮ꦳" => "v", // U+A9AE U+A9B3
    "ꦮ" => "w", // U+A9AE
    "ꦼ" => "x", // U+A9BC
    "ꦪ" => "y", // U+A9AA
    "ꦗ꦳" => "z", // U+A997 U+A9B3
};

/// Two-letter Latin consonants with a dedicated aksara.
pub static CONSONANT_DIGRAPHS: Map<&'static str, &'static str> = phf_map! {
    "ng" => "ꦔ", // U+A994
    "ny" => "ꦚ", // U+A99A
    "th" => "ꦛ", // U+A99B
    "dh" => "ꦝ", // U+A99D
};

/// Vowel carriers (ꦲ + sandhangan) and the digraph consonants.
pub static JAVANESE_COMPOUNDS: Map<&'static str, &'static str> = phf_map! {
    "ꦲꦶ" => "i", // U+A9B2 U+A9B6
    "ꦲꦸ" => "u", // U+A9B2 U+A9B8
    "ꦲꦺ" => "e", // U+A9B2 U+A9BA
    "ꦲꦺꦴ" => "o", // U+A9B2 U+A9BA U+A9B4
    "ꦔ" => "ng", // U+A994
    "ꦚ" => "ny", // U+A99A
    "ꦛ" => "th", // U+A99B
    "ꦝ" => "dh", // U+A99D
};

/// Standalone vowel signs. Every key also appears in [`LATIN_TO_JAVANESE`],
/// which the forward scanner consults first.
pub static VOWEL_DIACRITICS: Map<&'static str, &'static str> = phf_map! {
    "a" => "ꦄ", // U+A984
    "i" => "ꦶ", // U+A9B6
    "u" => "ꦸ", // U+A9B8
    "e" => "ꦺ", // U+A9BA
    "o" => "ꦺꦴ", // U+A9BA U+A9B4
};

/// Punctuation. Every bracket maps to the pangkon glyph.
pub static SPECIAL_CHARACTERS: Map<&'static str, &'static str> = phf_map! {
    "(" => "꧀", // U+A9C0
    ")" => "꧀", // U+A9C0
    "[" => "꧀", // U+A9C0
    "]" => "꧀", // U+A9C0
    "." => "꧁", // U+A9C1
    "," => "꧂", // U+A9C2
};

pub static TABLES: Tables = Tables {
    latin_to_javanese: RuleTable::new("latin_to_javanese", &LATIN_TO_JAVANESE),
    javanese_to_latin: RuleTable::new("javanese_to_latin", &JAVANESE_TO_LATIN),
    consonant_digraphs: RuleTable::new("consonant_digraphs", &CONSONANT_DIGRAPHS),
    javanese_compounds: RuleTable::new("javanese_compounds", &JAVANESE_COMPOUNDS),
    vowel_diacritics: RuleTable::new("vowel_diacritics", &VOWEL_DIACRITICS),
    special_characters: RuleTable::new("special_characters", &SPECIAL_CHARACTERS),
};
