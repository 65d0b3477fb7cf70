//! Capitalization of replacements relative to the word the user typed.

/// Re-case `replacement` after `original`.
///
/// Only the first character is forced: if `original` starts with an
/// uppercase letter, the first character of `replacement` is uppercased and
/// the rest is kept as authored. Otherwise `replacement` is returned as is.
pub fn apply_casing(original: &str, replacement: &str) -> String {
    if starts_uppercase(original) {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
