//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete type of
//! every stage, so a chain of zero-sized stages compiles down to a straight
//! sequence of `needs_apply`/`apply` calls with no vtable and no heap.
use crate::{stage::Stage, table::Tables};
use std::borrow::Cow;
use tracing::trace;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, tables: &Tables) -> Cow<'a, str>;

    /// Append `stage` so it runs after everything already in `self`.
    #[inline(always)]
    fn then<S: Stage>(self, stage: S) -> ChainedProcess<S, Self>
    where
        Self: Sized,
    {
        ChainedProcess {
            stage,
            previous: self,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _tables: &Tables) -> Cow<'a, str> {
        text
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, tables: &Tables) -> Cow<'a, str> {
        let current = self.previous.process(text, tables);
        if !self.stage.needs_apply(&current, tables) {
            return current;
        }
        trace!(stage = self.stage.name(), "applying stage");
        self.stage.apply(current, tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{LowerCase, ReplaceDigraphs, Trim};
    use crate::table::TABLES;

    #[test]
    fn empty_process_is_identity() {
        let input = "  KANCA ";
        let out = EmptyProcess.process(Cow::Borrowed(input), &TABLES);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn stages_run_in_insertion_order() {
        // Lower-casing first lets the digraph pass see "ng".
        let lower_then_digraphs = EmptyProcess.then(LowerCase).then(ReplaceDigraphs);
        assert_eq!(lower_then_digraphs.process(Cow::Borrowed("NGOKO"), &TABLES), "ꦔoko");

        let digraphs_then_lower = EmptyProcess.then(ReplaceDigraphs).then(LowerCase);
        assert_eq!(digraphs_then_lower.process(Cow::Borrowed("NGOKO"), &TABLES), "ngoko");
    }

    #[test]
    fn untouched_text_stays_borrowed() {
        let chain = EmptyProcess.then(Trim).then(LowerCase).then(ReplaceDigraphs);
        let input = "kanca";
        let out = chain.process(Cow::Borrowed(input), &TABLES);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
