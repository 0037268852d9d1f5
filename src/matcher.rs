//! Greedy longest-match scanner.
//!
//! Walks the input one `char` at a time. At every position it probes the
//! window `[i, i + n)` for `n` from the longest key length down to 1, and at
//! each length asks the rule tables in priority order. The first hit is
//! emitted and the cursor advances by `n`; if nothing matches, the current
//! `char` is copied through unchanged and the cursor advances by one.
//!
//! Because the outer loop is over lengths and the inner loop over tables, a
//! two-symbol key in a low-priority table still beats a one-symbol key in a
//! high-priority one. Priority only breaks ties between keys of equal length.
use crate::table::RuleTable;
use smallvec::SmallVec;

/// A hit at the current scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Number of input scalars consumed.
    pub len: usize,
    pub replacement: &'static str,
    /// Name of the table the key was found in.
    pub table: &'static str,
}

#[derive(Debug, Clone)]
pub struct RuleMatcher {
    rules: SmallVec<[RuleTable; 4]>,
    max_key_len: usize,
}

impl RuleMatcher {
    /// Rules are consulted in the order given.
    pub fn new<I: IntoIterator<Item = RuleTable>>(rules: I) -> Self {
        let rules: SmallVec<[RuleTable; 4]> = rules.into_iter().collect();
        let max_key_len = rules.iter().map(RuleTable::max_key_len).max().unwrap_or(0);
        Self { rules, max_key_len }
    }

    #[inline]
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Longest key matching a prefix of `rest`.
    ///
    /// `key` is scratch space reused across calls to avoid an allocation per
    /// probe; its contents on return are unspecified.
    pub fn longest_match(&self, rest: &[char], key: &mut String) -> Option<Match> {
        let upper = self.max_key_len.min(rest.len());
        for len in (1..=upper).rev() {
            key.clear();
            key.extend(&rest[..len]);
            for table in &self.rules {
                if let Some(replacement) = table.get(key.as_str()) {
                    return Some(Match {
                        len,
                        replacement,
                        table: table.name,
                    });
                }
            }
        }
        None
    }

    /// Translate `text`, passing unmatched characters through.
    pub fn translate(&self, text: &str) -> String {
        let symbols: SmallVec<[char; 64]> = text.chars().collect();
        // Latin → aksara roughly triples the byte count; the reverse shrinks it.
        let mut out = String::with_capacity(text.len() * 3);
        let mut key = String::with_capacity(self.max_key_len * 4);

        let mut i = 0;
        while i < symbols.len() {
            match self.longest_match(&symbols[i..], &mut key) {
                Some(m) => {
                    out.push_str(m.replacement);
                    i += m.len;
                }
                None => {
                    out.push(symbols[i]);
                    i += 1;
                }
            }
        }
        out
    }
}
