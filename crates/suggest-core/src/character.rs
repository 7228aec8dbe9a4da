// Character case conversion and case folding

// ---------------------------------------------------------------------------
// Simple case conversion
//
// Rust's to_lowercase / to_uppercase yield iterators because some characters
// expand to several. Suggestion text is compared position by position, so
// only the first character of the expansion is kept (one-to-one mapping).
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Build the case-folded key used for suggestion deduplication.
pub fn fold_case(text: &str) -> String {
    text.chars().map(simple_lower).collect()
}
