use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]*>?").expect("valid regex");
    static ref WORD: Regex = Regex::new(r"[A-Za-z]+").expect("valid regex");
}

/// Fold ASCII letters to lowercase. Anything else is left untouched; rejecting
/// non-alphabetic tokens is up to the caller.
pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// Extract raw words from a page body: markup inside `<...>` is skipped and a
/// word is a maximal run of ASCII letters. Words are returned as they appear,
/// without normalization or length filtering.
pub fn words(body: &str) -> Vec<String> {
    let text = TAG.replace_all(body, " ");
    WORD.find_iter(&text).map(|m| m.as_str().to_string()).collect()
}
