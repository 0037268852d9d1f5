use crate::{stage::Stage, table::Tables, unicode::has_uppercase};
use std::borrow::Cow;

/// Full Unicode lower-casing. Javanese has no case, so aksara pass through.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Tables) -> bool {
        has_uppercase(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, tables: &Tables) -> Cow<'a, str> {
        if !self.needs_apply(&text, tables) {
            return text;
        }
        if text.is_ascii() {
            return match text {
                Cow::Owned(mut s) => {
                    s.make_ascii_lowercase();
                    Cow::Owned(s)
                }
                Cow::Borrowed(s) => Cow::Owned(s.to_ascii_lowercase()),
            };
        }
        Cow::Owned(text.to_lowercase())
    }
}
