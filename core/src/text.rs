//! Turkish locale case folding.
//!
//! Turkish keeps dotted and dotless `i` as separate letters, so the generic
//! Unicode mappings are wrong for four characters: `I` lowers to `ı`, `İ` lowers
//! to `i`, `i` uppers to `İ` and `ı` uppers to `I`. All locale handling in the
//! crate goes through this module; everything downstream compares plain chars.
//!
//! A capital `I` followed by a combining dot above is the decomposed spelling
//! of `İ` and lowers to a single `i`.

use alloc::string::String;

const COMBINING_DOT_ABOVE: char = '\u{307}';

/// Lowercases a single char following Turkish rules.
pub fn turkish_lower_char(c: char) -> impl Iterator<Item = char> {
    let special = match c {
        'I' => Some('ı'),
        'İ' => Some('i'),
        _ => None,
    };
    let generic = special.is_none().then(|| c.to_lowercase());
    special.into_iter().chain(generic.into_iter().flatten())
}

/// Uppercases a single char following Turkish rules.
pub fn turkish_upper_char(c: char) -> impl Iterator<Item = char> {
    let special = match c {
        'i' => Some('İ'),
        'ı' => Some('I'),
        _ => None,
    };
    let generic = special.is_none().then(|| c.to_uppercase());
    special.into_iter().chain(generic.into_iter().flatten())
}

pub fn to_turkish_lower(text: &str) -> String {
    let mut lowered = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == 'I' && chars.next_if_eq(&COMBINING_DOT_ABOVE).is_some() {
            lowered.push('i');
        } else {
            lowered.extend(turkish_lower_char(c));
        }
    }
    lowered
}

pub fn to_turkish_upper(text: &str) -> String {
    text.chars().flat_map(turkish_upper_char).collect()
}
