//! Display-name canonicalization for brawlers and game modes.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A letter preceded by the start of the string or by anything that is not a
/// letter or an apostrophe.
static WORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^a-zA-Z\u{00C0}-\u{017F}'])([a-zA-Z\u{00C0}-\u{017F}])")
        .expect("word-start pattern is valid")
});

/// Lower-case the string, then upper-case the first letter of every word.
///
/// Punctuation counts as a word boundary, so `MR.P` becomes `Mr.P` and
/// `8-BIT` becomes `8-Bit`. Apostrophes do not split words.
pub fn capitalize_words(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    WORD_START
        .replace_all(&lowered, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

/// Canonical brawler name: `"MR. P"` → `"Mr.P"`.
pub fn brawler_name(raw: &str) -> String {
    capitalize_words(&raw.replace(". ", "."))
}

/// Canonical mode name: `"soloShowdown"` → `"Solo Showdown"`.
pub fn mode_name(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 4);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    capitalize_words(&spaced)
}

/// Map names are already display-ready.
pub fn map_name(raw: &str) -> String {
    raw.to_string()
}
