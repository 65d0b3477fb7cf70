//! Morphological fallback rules, applied when no dictionary layer matches.

/// Modern adjectival ending and its pre-reform counterpart.
const MODERN_ADJ_ENDING: &str = "ий";
const ARCHAIC_ADJ_ENDING: &str = "ій";

const HARD_SIGN: char = 'ъ';
const SOFT_SIGN: char = 'ь';

/// Letters after which no hard sign is written, including the pre-reform
/// ѣ, і, ѳ and ѵ.
const VOWELS: &str = "аеёиоуыэюяьѣіѳѵ";

pub fn is_vowel_like(c: char) -> bool {
    c == SOFT_SIGN || VOWELS.contains(c)
}

fn is_cyrillic_letter(c: char) -> bool {
    c.is_alphabetic() && ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// A word ending in `c` gets a terminal hard sign: any Cyrillic letter
/// outside the vowel set, except the hard sign itself.
fn takes_hard_sign(c: char) -> bool {
    is_cyrillic_letter(c) && !is_vowel_like(c) && c != HARD_SIGN
}

/// Apply the first matching rule to a lowercase word.
///
/// Returns `None` when no rule applies; the caller keeps the word unchanged.
pub fn apply_rules(lower: &str) -> Option<String> {
    if let Some(stem) = lower.strip_suffix(MODERN_ADJ_ENDING) {
        return Some(format!("{stem}{ARCHAIC_ADJ_ENDING}"));
    }

    let last = lower.chars().next_back()?;
    if takes_hard_sign(last) {
        let mut out = String::with_capacity(lower.len() + HARD_SIGN.len_utf8());
        out.push_str(lower);
        out.push(HARD_SIGN);
        return Some(out);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjectival_ending() {
        assert_eq!(apply_rules("синий").as_deref(), Some("синій"));
        assert_eq!(apply_rules("зимний").as_deref(), Some("зимній"));
        assert_eq!(apply_rules("ий").as_deref(), Some("ій"));
    }

    #[test]
    fn test_terminal_hard_sign() {
        assert_eq!(apply_rules("кот").as_deref(), Some("котъ"));
        assert_eq!(apply_rules("дуб").as_deref(), Some("дубъ"));
    }

    #[test]
    fn test_adjectival_rule_wins_over_hard_sign() {
        // "й" is not in the vowel set, but the ending rule comes first.
        assert_eq!(apply_rules("последний").as_deref(), Some("последній"));
    }

    #[test]
    fn test_vowel_and_soft_sign_endings_unchanged() {
        for word in ["мама", "поле", "дети", "окно", "тень", "море", "лѣсі"] {
            assert_eq!(apply_rules(word), None, "{word}");
        }
    }

    #[test]
    fn test_existing_hard_sign_not_doubled() {
        assert_eq!(apply_rules("котъ"), None);
    }

    #[test]
    fn test_short_i_takes_hard_sign() {
        assert_eq!(apply_rules("чай").as_deref(), Some("чайъ"));
        assert_eq!(apply_rules("сей").as_deref(), Some("сейъ"));
    }

    #[test]
    fn test_non_cyrillic_unchanged() {
        assert_eq!(apply_rules("hello"), None);
        assert_eq!(apply_rules("2024"), None);
        assert_eq!(apply_rules(""), None);
    }

    #[test]
    fn test_vowel_classification() {
        assert!(is_vowel_like('ѣ'));
        assert!(is_vowel_like('ь'));
        assert!(is_vowel_like('ѵ'));
        assert!(!is_vowel_like('т'));
        assert!(!is_vowel_like('й'));
    }
}
