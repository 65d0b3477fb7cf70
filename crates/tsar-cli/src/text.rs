//! Word-boundary handling of a keyboard, replayed over whole texts.
//!
//! The engine only rewrites single words. This module finds the word before
//! the caret, decides when a word has ended, and commits the replacement
//! followed by the terminator, the way the on-screen keyboard does.

use tsar_core::OrthographyEngine;

/// How many characters before the caret are inspected for the current word.
pub const LOOKBACK: usize = 80;

/// Input that ends a word and triggers a lookup.
pub const TERMINATORS: &[char] = &[' ', '\n', ',', '.', ';', ':', '?', '!'];

pub fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

/// The maximal trailing run of letters within the last `LOOKBACK`
/// characters of `before_caret`, or `None` if there is none.
pub fn last_word(before_caret: &str) -> Option<&str> {
    let window_start = before_caret
        .char_indices()
        .rev()
        .nth(LOOKBACK - 1)
        .map_or(0, |(i, _)| i);
    let window = &before_caret[window_start..];
    let start = window
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map(|(i, _)| i)?;
    Some(&window[start..])
}

/// Replace the word at the end of `buffer` in place.
/// Returns `true` if the buffer changed.
pub fn replace_last_word(engine: &OrthographyEngine, buffer: &mut String) -> bool {
    let Some(word) = last_word(buffer) else {
        return false;
    };
    let replacement = engine.replace_word(word);
    if replacement == word {
        return false;
    }
    let start = buffer.len() - word.len();
    buffer.truncate(start);
    buffer.push_str(&replacement);
    true
}

/// Replay `text` as if typed, rewriting each word when a terminator (or the
/// end of input) is reached. With `auto_replace` off the text is returned
/// unchanged.
pub fn rewrite_text(engine: &OrthographyEngine, text: &str, auto_replace: bool) -> String {
    if !auto_replace {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        if is_terminator(c) {
            replace_last_word(engine, &mut out);
        }
        out.push(c);
    }
    replace_last_word(engine, &mut out);
    out
}
