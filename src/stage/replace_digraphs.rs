//! Whole-string digraph substitution, the pre-pass of Latin → Javanese.
//!
//! Every occurrence of `ng`, `ny`, `th` and `dh` is rewritten to its aksara
//! before any scanning happens, so a digraph inside a word is caught even
//! when the scanner would have consumed its first letter as part of another
//! match. Replacements are Javanese scalars, so one substitution can never
//! produce a new digraph for the next one to match; the order of the four
//! passes does not affect the result.
//!
//! Expects lower-cased input: `NG` is not a digraph here.
use crate::{stage::Stage, table::Tables};
use memchr::memmem;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceDigraphs;

impl Stage for ReplaceDigraphs {
    fn name(&self) -> &'static str {
        "replace_digraphs"
    }

    #[inline]
    fn needs_apply(&self, text: &str, tables: &Tables) -> bool {
        let haystack = text.as_bytes();
        tables
            .consonant_digraphs
            .entries()
            .any(|(digraph, _)| memmem::find(haystack, digraph.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, tables: &Tables) -> Cow<'a, str> {
        let mut text = text;
        for (digraph, aksara) in tables.consonant_digraphs.entries() {
            if memmem::find(text.as_bytes(), digraph.as_bytes()).is_some() {
                text = Cow::Owned(text.replace(digraph, aksara));
            }
        }
        text
    }
}
