//! Text stages run before the scanner.
//!
//! A stage is a single `Cow<str>` → `Cow<str>` step. Stages are zero-sized and
//! stateless; the only data they see is the `Tables` they are handed. Every
//! stage must hand back the borrowed input untouched when it has nothing to do,
//! so a chain of stages over already-normalized text never allocates.

pub mod lower_case;
pub mod replace_digraphs;
pub mod trim;

pub use lower_case::LowerCase;
pub use replace_digraphs::ReplaceDigraphs;
pub use trim::Trim;

use crate::table::Tables;
use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in trace output.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, tables: &Tables) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>, tables: &Tables) -> Cow<'a, str>;
}
