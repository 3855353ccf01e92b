use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD_REGEX: Regex = Regex::new(r"\W+").unwrap();
}

/// Splits the text at all non-word characters and converts
/// the resulting words to lowercase.
pub fn split_text_into_lowercase_words(text: &str) -> Vec<String> {
    NON_WORD_REGEX
        .split(text)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}
