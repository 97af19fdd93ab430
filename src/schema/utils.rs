//! Pure text helpers for the form editor.
//!
//! - Deriving a schema property name from free question text
//! - Splitting a delimited options string into the options list

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\s]").expect("hard-coded pattern")
});

/// Derives a camelCase property name from free question text.
///
/// Strips every character that is neither a word character nor whitespace,
/// then joins the remaining words with the first fully lower-cased and each
/// later word title-cased. Text that strips down to nothing yields `""`.
pub fn format_to_camel_case(text: &str) -> String {
    let stripped = NON_WORD.replace_all(text, "");
    let mut result = String::new();
    for (index, word) in stripped.split_whitespace().enumerate() {
        if index == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_uppercase());
                result.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    result
}

/// Splits a comma-delimited options string into trimmed segments.
///
/// Empty segments are kept as typed; callers decide whether they matter.
pub fn split_options(text: &str) -> Vec<String> {
    text.split(',').map(|segment| segment.trim().to_string()).collect()
}
