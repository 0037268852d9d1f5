//! Script detection and Aksara Jawa validation.
use crate::unicode::{contains_javanese, is_javanese_or_whitespace};
use std::fmt;

/// Writing system of an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Javanese,
}

impl Script {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Script::Latin => "Latin",
            Script::Javanese => "Javanese",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Javanese` as soon as one character falls in U+A980..=U+A9DF, otherwise
/// `Latin`. The empty string is `Latin`.
#[inline]
pub fn detect_script(text: &str) -> Script {
    if contains_javanese(text) {
        Script::Javanese
    } else {
        Script::Latin
    }
}

/// True iff the trimmed text is non-empty and consists only of Javanese-block
/// characters and whitespace.
#[inline]
pub fn is_valid_aksara_jawa(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().all(is_javanese_or_whitespace)
}
