// Typed-input state for the word currently being composed

use std::sync::atomic::{AtomicU64, Ordering};

use crate::case::{CaseType, detect_case};

/// Source of per-instance identities. Identity 0 is never handed out.
static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

fn next_identity() -> u64 {
    NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed)
}

/// The characters entered so far for the current word.
///
/// Each typed character carries the key codes that could plausibly have
/// been meant by the keystroke (neighbouring keys on a noisy touch
/// surface). The first entry is always the primary character itself.
///
/// The state is append-only within a word. Starting a new word is done
/// with [`TypedWord::reset`]. Every mutation advances [`revision`], and
/// every instance (clones included) has its own [`identity`]; the engine
/// compares both to decide whether its cached suggestion list is still
/// current.
///
/// [`revision`]: TypedWord::revision
/// [`identity`]: TypedWord::identity
#[derive(Debug)]
pub struct TypedWord {
    /// Primary characters, in typing order.
    chars: Vec<char>,
    /// Per-character key codes; `codes[i][0] == chars[i]`.
    codes: Vec<Vec<char>>,
    identity: u64,
    revision: u64,
}

impl TypedWord {
    /// Create an empty typed word.
    pub fn new() -> Self {
        Self {
            chars: Vec::new(),
            codes: Vec::new(),
            identity: next_identity(),
            revision: 0,
        }
    }

    /// Create a typed word as if `text` had been typed key by key with no
    /// alternate codes.
    pub fn from_text(text: &str) -> Self {
        let mut word = Self::new();
        word.push_str(text);
        word
    }

    /// Append one keystroke.
    ///
    /// `alternates` lists other key codes the keystroke may stand for.
    /// Duplicates of the primary character are dropped.
    pub fn push(&mut self, primary: char, alternates: &[char]) {
        let mut codes = Vec::with_capacity(alternates.len() + 1);
        codes.push(primary);
        for &alt in alternates {
            if !codes.contains(&alt) {
                codes.push(alt);
            }
        }
        self.chars.push(primary);
        self.codes.push(codes);
        self.revision += 1;
    }

    /// Append every character of `text`, each with no alternates.
    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push(c, &[]);
        }
    }

    /// Clear the state so a new word can begin.
    pub fn reset(&mut self) {
        self.chars.clear();
        self.codes.clear();
        self.revision += 1;
    }

    /// The primary characters concatenated.
    pub fn typed_text(&self) -> String {
        self.chars.iter().collect()
    }

    /// The primary characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of code points typed.
    pub fn code_point_count(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Key codes for the character at `index`, primary first.
    pub fn alternates_at(&self, index: usize) -> Option<&[char]> {
        self.codes.get(index).map(Vec::as_slice)
    }

    /// True when suggestions will start with a capital: the word is
    /// capitalized or all upper case.
    pub fn is_first_char_capitalized(&self) -> bool {
        matches!(self.case_type(), CaseType::FirstUpper | CaseType::AllUpper)
    }

    /// True when suggestions will be upper-cased throughout. A single
    /// capital letter does not count.
    pub fn is_all_upper_case(&self) -> bool {
        self.case_type() == CaseType::AllUpper
    }

    /// Case shape to mirror onto suggestions.
    ///
    /// A single uppercase letter counts as a capitalized word, not as
    /// shouting.
    pub fn case_type(&self) -> CaseType {
        match detect_case(&self.chars) {
            CaseType::AllUpper if self.chars.len() == 1 => CaseType::FirstUpper,
            other => other,
        }
    }

    /// Identity of this instance.
    pub fn identity(&self) -> u64 {
        self.identity
    }

    /// Number of mutations applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for TypedWord {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TypedWord {
    /// A clone gets a fresh identity: it may diverge from its source
    /// while sharing its revision number.
    fn clone(&self) -> Self {
        Self {
            chars: self.chars.clone(),
            codes: self.codes.clone(),
            identity: next_identity(),
            revision: self.revision,
        }
    }
}
