use crate::{stage::Stage, table::Tables};
use std::borrow::Cow;

/// Strips leading and trailing Unicode whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trim;

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Tables) -> bool {
        // Only the edge chars can be trimmed.
        match (text.chars().next(), text.chars().next_back()) {
            (Some(first), Some(last)) => first.is_whitespace() || last.is_whitespace(),
            _ => false,
        }
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Tables) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => {
                let trimmed = s.trim();
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_string())
                }
            }
        }
    }
}
