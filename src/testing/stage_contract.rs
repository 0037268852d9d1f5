use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &["kanca 123", " ngoko ", "KANCA", "ꦏꦚ꧀ꦕ", ""]
    }

    /// Samples that should pass through unchanged (zero-copy test).
    fn should_pass_through() -> &'static [&'static str] {
        &["kanca", "ꦏꦚ꧀ꦕ", "abc def", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal contract.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives mixed Latin/aksara/other input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

use crate::table::{TABLES, Tables};
use std::borrow::Cow;

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    let tables = TABLES;

    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        // First pass – respect needs_apply
        if stage.needs_apply(&text, &tables) {
            let old_ptr = text.as_ref() as *const str;
            text = stage.apply(text, &tables);
            assert_ne!(old_ptr, text.as_ref() as *const str);
        } else {
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // Second pass – must never allocate again
        let old_ptr = text.as_ref() as *const str;
        if stage.needs_apply(&text, &tables) {
            text = stage.apply(text, &tables);
        }
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second pass (stage: {}, input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let original_ptr = pass_through as *const str;
        let text = stage.apply(Cow::Borrowed(pass_through), &tables);

        assert!(!stage.needs_apply(pass_through, &tables));
        assert_eq!(text.as_ref(), pass_through);
        assert_eq!(
            original_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on pass-through sample (stage: {}, input: `{pass_through}`)",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let mut text = Cow::Borrowed(input);
        if stage.needs_apply(&text, &tables) {
            text = stage.apply(text, &tables);
        }
        assert_eq!(text.as_ref(), expected, "stage: {}", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let tables = TABLES;
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input), &tables);
        let twice = stage.apply(once.clone(), &tables);
        assert_eq!(
            once,
            twice,
            "apply() not idempotent for `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let tables = TABLES;
    for &sample in S::samples() {
        check_accuracy(&stage, sample, &tables);
    }
    for &(input, _) in S::should_transform() {
        check_accuracy(&stage, input, &tables);
    }
    let must_not_touch = ["", "kanca", "world123", "ꦏꦚ꧀ꦕ"];
    for &clean in &must_not_touch {
        check_accuracy(&stage, clean, &tables);
    }
}

#[inline(always)]
fn check_accuracy<S: Stage>(stage: &S, input: &str, tables: &Tables) {
    let predicted = stage.needs_apply(input, tables);
    // Owned input, so stages that always allocate are not penalised.
    let output = stage.apply(Cow::Owned(input.to_owned()), tables);
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    let tables = TABLES;
    let empty: &str = "";
    let result_empty = stage.apply(Cow::Borrowed(empty), &tables);
    assert_eq!(result_empty.as_ref(), "");
    // Lower-case ASCII without digraphs or edge whitespace is left alone
    let ascii = "kanca 123 !@#";
    let result_ascii = stage.apply(Cow::Borrowed(ascii), &tables);
    assert_eq!(result_ascii.as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let tables = TABLES;
    let _ = stage.apply(
        Cow::Borrowed("Ngoko ꦏꦚ꧀ꦕ 世界 русский Türkçe العربية ꧁꧂"),
        &tables,
    );
}
