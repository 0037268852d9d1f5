// Javanese block: U+A980..=U+A9DF (128 code points, 91 assigned).
pub const JAVANESE_START: u32 = 0xA980;
pub const JAVANESE_END: u32 = 0xA9DF;

#[inline(always)]
pub const fn is_javanese(c: char) -> bool {
    let cp = c as u32;
    cp >= JAVANESE_START && cp <= JAVANESE_END
}

/// Characters allowed in a run of Aksara Jawa text.
#[inline(always)]
pub fn is_javanese_or_whitespace(c: char) -> bool {
    is_javanese(c) || c.is_whitespace()
}

#[inline]
pub fn contains_javanese(text: &str) -> bool {
    // Every Javanese scalar encodes as EA A6..A7 xx in UTF-8.
    // Pure ASCII can be rejected without decoding.
    if text.is_ascii() {
        return false;
    }
    text.chars().any(is_javanese)
}

/// True if any `char` would change under `char::to_lowercase`.
#[inline]
pub fn has_uppercase(text: &str) -> bool {
    if text.is_ascii() {
        return text.bytes().any(|b| b.is_ascii_uppercase());
    }
    text.chars().any(|c| {
        let mut lower = c.to_lowercase();
        lower.next() != Some(c) || lower.next().is_some()
    })
}
