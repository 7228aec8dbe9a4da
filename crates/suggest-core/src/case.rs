// Case-pattern detection and mirroring of the typed word's case onto candidates

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "hello".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Hello".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "heLLo".
    Complex,
    /// All letters are uppercase: "HELLO".
    AllUpper,
}

/// Detect the case pattern of a character slice.
///
/// Non-letter characters (digits, punctuation) are ignored when
/// determining the case pattern.
pub fn detect_case(word: &[char]) -> CaseType {
    if word.is_empty() {
        return CaseType::NoLetters;
    }

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(word[0]) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(word[0]) {
        all_uc = false;
        no_letters = false;
    }

    for &c in &word[1..] {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Mirror the typed word's case shape onto a candidate.
///
/// Only the two shapes a user produces deliberately are mirrored:
/// - `FirstUpper` -- the first character of the candidate is uppercased,
///   the rest is left alone ("hello" -> "Hello", "iPhone" -> "IPhone").
/// - `AllUpper` -- every letter is uppercased.
///
/// Every other shape leaves the candidate untouched, so a source's own
/// capitalization ("I", "McDonald") survives lowercase typing.
pub fn mirror_case(candidate: &mut [char], typed: CaseType) {
    if candidate.is_empty() {
        return;
    }
    match typed {
        CaseType::FirstUpper => {
            candidate[0] = simple_upper(candidate[0]);
        }
        CaseType::AllUpper => {
            for c in candidate.iter_mut() {
                *c = simple_upper(*c);
            }
        }
        CaseType::NoLetters | CaseType::AllLower | CaseType::Complex => {}
    }
}

/// Lowercase every letter of the slice in place.
pub fn to_lower(word: &mut [char]) {
    for c in word.iter_mut() {
        *c = simple_lower(*c);
    }
}
