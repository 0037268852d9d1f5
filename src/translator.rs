use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    matcher::RuleMatcher,
    process::{ChainedProcess, EmptyProcess, Process},
    script::{self, Script},
    stage::{LowerCase, ReplaceDigraphs, Stage, Trim},
    table::{TABLES, Tables},
};
use std::borrow::Cow;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TranslateError {
    #[error("input cannot be empty")]
    EmptyInput,
}

/// Lower-case, then rewrite digraphs to aksara.
type ForwardPrepass = ChainedProcess<ReplaceDigraphs, ChainedProcess<LowerCase, EmptyProcess>>;

/// Bidirectional Latin ⇄ Aksara Jawa translator.
///
/// Build once and share: every call is stateless and the translator only holds
/// `'static` table references, so `&Translator` is safe to use from any
/// number of threads.
///
/// ```
/// use aksara::{Script, Translator};
///
/// let t = Translator::new();
/// assert_eq!(t.translate_latin_to_javanese("kanca").unwrap(), "ꦏꦲꦤꦕꦲ");
/// assert_eq!(t.detect_script("ꦏꦚ꧀ꦕ"), Script::Javanese);
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    tables: Tables,
    forward_prepass: ForwardPrepass,
    forward: RuleMatcher,
    reverse: RuleMatcher,
    normalize_input: bool,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    #[inline(always)]
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Latin → Aksara Jawa.
    ///
    /// Lower-cases the input, rewrites every `ng`/`ny`/`th`/`dh` to its
    /// aksara, then scans with punctuation, digraph, base-letter and vowel
    /// rules in that priority. Anything unmapped is kept as is.
    pub fn translate_latin_to_javanese(&self, text: &str) -> Result<String, TranslateError> {
        if text.is_empty() {
            debug!(direction = "latin_to_javanese", "rejecting empty input");
            return Err(TranslateError::EmptyInput);
        }

        let prepared = self
            .forward_prepass
            .process(Cow::Borrowed(text), &self.tables);
        let out = self.forward.translate(&prepared);

        trace!(
            direction = "latin_to_javanese",
            input_bytes = text.len(),
            output_bytes = out.len(),
            "translated"
        );
        Ok(out)
    }

    /// Aksara Jawa → Latin.
    ///
    /// A whole input that is itself a compound key (`ꦲꦺꦴ`, `ꦚ`, …) maps
    /// straight to its Latin value. Otherwise the input is scanned with
    /// compound rules ahead of base letters, longest key first.
    pub fn translate_javanese_to_latin(&self, text: &str) -> Result<String, TranslateError> {
        if text.is_empty() {
            debug!(direction = "javanese_to_latin", "rejecting empty input");
            return Err(TranslateError::EmptyInput);
        }

        if let Some(latin) = self.tables.javanese_compounds.get(text) {
            trace!(direction = "javanese_to_latin", "whole-input compound");
            return Ok(latin.to_string());
        }

        let out = self.reverse.translate(text);

        trace!(
            direction = "javanese_to_latin",
            input_bytes = text.len(),
            output_bytes = out.len(),
            "translated"
        );
        Ok(out)
    }

    /// Detect the script and translate in the matching direction.
    pub fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.translate_detected(text).map(|(_, out)| out)
    }

    /// Like [`translate`](Self::translate), also returning the script that
    /// was detected (and so the direction that ran).
    pub fn translate_detected(&self, text: &str) -> Result<(Script, String), TranslateError> {
        let text = if self.normalize_input {
            self.normalize_text(text)
        } else {
            Cow::Borrowed(text)
        };

        let script = self.detect_script(&text);
        debug!(%script, input_bytes = text.len(), "dispatching translation");

        let out = match script {
            Script::Latin => self.translate_latin_to_javanese(&text)?,
            Script::Javanese => self.translate_javanese_to_latin(&text)?,
        };
        Ok((script, out))
    }

    #[inline]
    pub fn detect_script(&self, text: &str) -> Script {
        script::detect_script(text)
    }

    #[inline]
    pub fn is_valid_aksara_jawa(&self, text: &str) -> bool {
        script::is_valid_aksara_jawa(text)
    }

    /// Trim; then lower-case unless the text is Aksara Jawa.
    ///
    /// Borrows when nothing changes.
    pub fn normalize_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let trimmed = Trim.apply(Cow::Borrowed(text), &self.tables);
        if self.is_valid_aksara_jawa(&trimmed) {
            return trimmed;
        }
        LowerCase.apply(trimmed, &self.tables)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TranslatorBuilder {
    normalize_input: bool,
}

impl TranslatorBuilder {
    /// Run [`Translator::normalize_text`] on the input of
    /// [`Translator::translate`] before detecting its script.
    pub fn normalize_input(mut self, yes: bool) -> Self {
        self.normalize_input = yes;
        self
    }

    pub fn build(self) -> Translator {
        let tables = TABLES;
        let forward = RuleMatcher::new([
            tables.special_characters,
            tables.consonant_digraphs,
            tables.latin_to_javanese,
            tables.vowel_diacritics,
        ]);
        let reverse = RuleMatcher::new([tables.javanese_compounds, tables.javanese_to_latin]);

        Translator {
            tables,
            forward_prepass: EmptyProcess.then(LowerCase).then(ReplaceDigraphs),
            forward,
            reverse,
            normalize_input: self.normalize_input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected_both_ways() {
        let t = Translator::new();
        assert_eq!(t.translate_latin_to_javanese(""), Err(TranslateError::EmptyInput));
        assert_eq!(t.translate_javanese_to_latin(""), Err(TranslateError::EmptyInput));
        assert_eq!(t.translate(""), Err(TranslateError::EmptyInput));
    }

    #[test]
    fn error_message() {
        assert_eq!(TranslateError::EmptyInput.to_string(), "input cannot be empty");
    }

    #[test]
    fn kanca_uses_base_letters() {
        let t = Translator::new();
        assert_eq!(t.translate_latin_to_javanese("kanca").unwrap(), "ꦏꦲꦤꦕꦲ");
    }

    #[test]
    fn ngoko_goes_through_digraph() {
        let t = Translator::new();
        let out = t.translate_latin_to_javanese("ngoko").unwrap();
        assert_eq!(out, "ꦔꦺꦴꦏꦺꦴ");
        assert!(!out.contains('ꦤ'));
        assert!(!out.contains('ꦒ'));
    }

    #[test]
    fn forward_is_case_insensitive() {
        let t = Translator::new();
        assert_eq!(
            t.translate_latin_to_javanese("NGOKO").unwrap(),
            t.translate_latin_to_javanese("ngoko").unwrap()
        );
    }

    #[test]
    fn brackets_map_to_one_glyph() {
        let t = Translator::new();
        assert_eq!(t.translate_latin_to_javanese("(a)").unwrap(), "꧀ꦲ꧀");
        assert_eq!(t.translate_latin_to_javanese("[a].").unwrap(), "꧀ꦲ꧀꧁");
    }

    #[test]
    fn unmapped_symbols_pass_through() {
        let t = Translator::new();
        assert_eq!(t.translate_latin_to_javanese("k 1!").unwrap(), "ꦏ 1!");
        assert_eq!(t.translate_latin_to_javanese("ꦏ").unwrap(), "ꦏ");
        assert_eq!(t.translate_latin_to_javanese("   ").unwrap(), "   ");
    }

    #[test]
    fn reverse_whole_input_shortcut() {
        let t = Translator::new();
        assert_eq!(t.translate_javanese_to_latin("ꦲꦺꦴ").unwrap(), "o");
        assert_eq!(t.translate_javanese_to_latin("ꦚ").unwrap(), "ny");
    }

    #[test]
    fn reverse_scans_by_scalar() {
        let t = Translator::new();
        assert_eq!(t.translate_javanese_to_latin("ꦏꦲꦤꦕꦲ").unwrap(), "kanca");
        assert_eq!(t.translate_javanese_to_latin("ꦏꦚ꧀ꦕ").unwrap(), "kny꧀c");
        assert_eq!(t.translate_javanese_to_latin("ꦲꦃꦲ").unwrap(), "ha");
        assert_eq!(t.translate_javanese_to_latin("ꦲꦶꦏ").unwrap(), "ik");
    }

    #[test]
    fn reverse_prefers_longest_key_mid_string() {
        let t = Translator::new();
        assert_eq!(t.translate_javanese_to_latin("ꦏꦲꦺꦴ").unwrap(), "ko");
        assert_eq!(t.translate_javanese_to_latin("ꦏꦔ").unwrap(), "kng");
        assert_eq!(t.translate_javanese_to_latin("ꦏꦺꦴ").unwrap(), "ko");
    }

    #[test]
    fn dispatch_picks_direction() {
        let t = Translator::new();
        assert_eq!(
            t.translate_detected("kanca").unwrap(),
            (Script::Latin, "ꦏꦲꦤꦕꦲ".to_string())
        );
        assert_eq!(
            t.translate_detected("ꦏꦲꦤꦕꦲ").unwrap(),
            (Script::Javanese, "kanca".to_string())
        );
    }

    #[test]
    fn normalize_text_cases() {
        let t = Translator::new();
        assert_eq!(t.normalize_text("  KANCA "), "kanca");
        assert_eq!(t.normalize_text(" ꦏꦚ꧀ꦕ\n"), "ꦏꦚ꧀ꦕ");
        let input = "kanca";
        assert!(matches!(t.normalize_text(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn builder_normalizes_input() {
        let t = Translator::builder().normalize_input(true).build();
        assert_eq!(t.translate("  KANCA  ").unwrap(), "ꦏꦲꦤꦕꦲ");
        assert_eq!(t.translate(" \t "), Err(TranslateError::EmptyInput));

        let raw = Translator::new();
        assert_eq!(raw.translate("  KANCA  ").unwrap(), "  ꦏꦲꦤꦕꦲ  ");
        assert_eq!(raw.translate(" \t ").unwrap(), " \t ");
    }

    #[test]
    fn translator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
