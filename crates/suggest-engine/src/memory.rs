// In-memory lexicon source: abbreviation and auto-text tables plus a
// frequency-ranked word list, loadable from JSON.

use std::cell::Cell;
use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use suggest_core::case::to_lower;
use suggest_core::character::{fold_case, simple_lower};
use suggest_core::{DictionaryId, TypedWord};

use crate::collector::CandidateCollector;
use crate::config::ConfigError;
use crate::source::{SourceError, SuggestionSource};

/// Longest typed word the lexicon will look up.
pub const MAX_WORD_CHARS: usize = 255;

/// Default number of dictionary words reported per lookup.
const DEFAULT_MAX_DICTIONARY_RESULTS: usize = 8;

/// Score reported for abbreviation and auto-text entries.
const TABLE_SCORE: i32 = 255;

fn default_frequency() -> i32 {
    1
}

/// One dictionary word and its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconWord {
    pub word: String,
    #[serde(default = "default_frequency")]
    pub frequency: i32,
}

/// Serializable word tables.
///
/// ```json
/// {
///   "abbreviations": { "wfh": ["work from home"] },
///   "auto_text": { "i": "I" },
///   "words": [ { "word": "hello", "frequency": 120 } ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Typed shortcut -> expansions, in the order they should be offered.
    pub abbreviations: BTreeMap<String, Vec<String>>,
    /// Typed word -> replacement.
    pub auto_text: BTreeMap<String, String>,
    pub words: Vec<LexiconWord>,
}

impl Lexicon {
    /// Parse and validate a JSON lexicon.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let lexicon: Self = serde_json::from_str(json)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Reject empty keys, empty expansions, empty words and table keys
    /// that differ only by letter case.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_folded_keys("abbreviation", self.abbreviations.keys())?;
        check_folded_keys("auto-text", self.auto_text.keys())?;
        for (key, expansions) in &self.abbreviations {
            if key.is_empty() {
                return Err(ConfigError::InvalidLexicon("empty abbreviation key".to_string()));
            }
            if expansions.is_empty() || expansions.iter().any(String::is_empty) {
                return Err(ConfigError::InvalidLexicon(format!(
                    "abbreviation '{key}' has an empty expansion"
                )));
            }
        }
        for (key, replacement) in &self.auto_text {
            if key.is_empty() || replacement.is_empty() {
                return Err(ConfigError::InvalidLexicon(format!(
                    "auto-text entry '{key}' -> '{replacement}' is empty"
                )));
            }
        }
        if let Some(pos) = self.words.iter().position(|w| w.word.is_empty()) {
            return Err(ConfigError::InvalidLexicon(format!("word #{pos} is empty")));
        }
        Ok(())
    }
}

/// Table lookups are case-insensitive, so two keys folding to the same
/// text would shadow each other.
fn check_folded_keys<'a>(
    table: &str,
    keys: impl Iterator<Item = &'a String>,
) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for key in keys {
        if let Some(previous) = seen.insert(fold_case(key), key) {
            return Err(ConfigError::InvalidLexicon(format!(
                "{table} keys '{previous}' and '{key}' differ only by case"
            )));
        }
    }
    Ok(())
}

/// A dictionary word prepared for prefix matching.
#[derive(Debug)]
struct IndexedWord {
    /// Lowercased characters, compared against the typed key codes.
    lowered: Vec<char>,
    /// Characters as listed, reported to the collector.
    chars: Vec<char>,
    frequency: i32,
}

/// A [`SuggestionSource`] answering from a [`Lexicon`] held in memory.
///
/// - Abbreviations and auto-text match the typed word case-insensitively.
/// - Dictionary lookup is a prefix match in which every typed position may
///   match any of that keystroke's alternate codes. Matches are reported by
///   descending frequency.
#[derive(Debug)]
pub struct MemorySource {
    dictionary_id: DictionaryId,
    abbreviations: HashMap<String, Vec<String>>,
    auto_text: HashMap<String, String>,
    /// Sorted by descending frequency, then alphabetically.
    words: Vec<IndexedWord>,
    max_dictionary_results: usize,
    incognito: bool,
    /// Lookups answered outside incognito mode.
    lookups_served: Cell<u64>,
}

impl MemorySource {
    /// Index a lexicon. Entries are case-folded for lookup.
    pub fn new(lexicon: Lexicon, dictionary_id: DictionaryId) -> Self {
        let abbreviations = lexicon
            .abbreviations
            .into_iter()
            .map(|(key, expansions)| (fold_case(&key), expansions))
            .collect();
        let auto_text = lexicon
            .auto_text
            .into_iter()
            .map(|(key, replacement)| (fold_case(&key), replacement))
            .collect();

        let mut words: Vec<IndexedWord> = lexicon
            .words
            .into_iter()
            .map(|w| {
                let chars: Vec<char> = w.word.chars().collect();
                let mut lowered = chars.clone();
                to_lower(&mut lowered);
                IndexedWord {
                    lowered,
                    chars,
                    frequency: w.frequency,
                }
            })
            .collect();
        words.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.chars.cmp(&b.chars))
        });

        Self {
            dictionary_id,
            abbreviations,
            auto_text,
            words,
            max_dictionary_results: DEFAULT_MAX_DICTIONARY_RESULTS,
            incognito: false,
            lookups_served: Cell::new(0),
        }
    }

    /// Limit the number of dictionary words reported per lookup.
    pub fn set_max_dictionary_results(&mut self, value: usize) {
        self.max_dictionary_results = value;
    }

    /// Number of lookups answered while not in incognito mode.
    pub fn lookups_served(&self) -> u64 {
        self.lookups_served.get()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn check_word(&self, word: &TypedWord) -> Result<(), SourceError> {
        let len = word.code_point_count();
        if len > MAX_WORD_CHARS {
            return Err(SourceError::WordTooLong {
                len,
                max: MAX_WORD_CHARS,
            });
        }
        if !self.incognito {
            self.lookups_served.set(self.lookups_served.get() + 1);
        }
        Ok(())
    }

    /// Whether `candidate` starts with something the typed keys could spell.
    fn matches_typed_prefix(candidate: &[char], word: &TypedWord) -> bool {
        if candidate.len() < word.code_point_count() {
            return false;
        }
        candidate
            .iter()
            .enumerate()
            .take(word.code_point_count())
            .all(|(i, &c)| {
                word.alternates_at(i)
                    .is_some_and(|codes| codes.iter().any(|&code| simple_lower(code) == c))
            })
    }
}

impl SuggestionSource for MemorySource {
    fn abbreviations(
        &self,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError> {
        self.check_word(word)?;
        if let Some(expansions) = self.abbreviations.get(&fold_case(&word.typed_text())) {
            for expansion in expansions {
                collector.add(expansion, TABLE_SCORE, Some(self.dictionary_id));
            }
        }
        Ok(())
    }

    fn auto_text(
        &self,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError> {
        self.check_word(word)?;
        if let Some(replacement) = self.auto_text.get(&fold_case(&word.typed_text())) {
            collector.add(replacement, TABLE_SCORE, Some(self.dictionary_id));
        }
        Ok(())
    }

    fn suggestions(
        &self,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError> {
        self.check_word(word)?;
        let matches = self
            .words
            .iter()
            .filter(|w| Self::matches_typed_prefix(&w.lowered, word))
            .take(self.max_dictionary_results);
        let origin = Some(self.dictionary_id);
        for w in matches {
            collector.add_word(&w.chars, 0, w.chars.len(), w.frequency, origin);
        }
        Ok(())
    }

    fn set_incognito_mode(&mut self, incognito: bool) {
        self.incognito = incognito;
    }

    fn is_incognito_mode(&self) -> bool {
        self.incognito
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suggest_core::SourceKind;

    const LEXICON: &str = r#"{
        "abbreviations": { "wfh": ["work from home"], "brb": ["be right back", "bathroom break"] },
        "auto_text": { "i": "I", "teh": "the" },
        "words": [
            { "word": "hello", "frequency": 120 },
            { "word": "help", "frequency": 200 },
            { "word": "hell", "frequency": 40 },
            { "word": "jelly", "frequency": 60 },
            { "word": "Helsinki" }
        ]
    }"#;

    fn source() -> MemorySource {
        MemorySource::new(Lexicon::from_json(LEXICON).unwrap(), DictionaryId(7))
    }

    fn collect(source: &MemorySource, kind: SourceKind, word: &TypedWord) -> Vec<String> {
        let mut collector = CandidateCollector::new(kind);
        source.lookup(kind, word, &mut collector).unwrap();
        collector
            .into_candidates()
            .into_iter()
            .map(|c| c.text)
            .collect()
    }

    #[test]
    fn lexicon_parses_with_default_frequency() {
        let lexicon = Lexicon::from_json(LEXICON).unwrap();
        assert_eq!(lexicon.words.len(), 5);
        assert_eq!(lexicon.words[4].frequency, 1);
        assert_eq!(lexicon.auto_text.get("i").map(String::as_str), Some("I"));
    }

    #[test]
    fn lexicon_rejects_keys_differing_only_by_case() {
        let err = Lexicon::from_json(
            r#"{"abbreviations": {"WFH": ["working from home"], "wfh": ["work from home"]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLexicon(_)));
        assert!(err.to_string().contains("differ only by case"));

        let err = Lexicon::from_json(r#"{"auto_text": {"Teh": "The", "teh": "the"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLexicon(_)));

        // the same key in both tables is fine
        let both = r#"{"abbreviations": {"i": ["I"]}, "auto_text": {"i": "I"}}"#;
        assert!(Lexicon::from_json(both).is_ok());
    }

    #[test]
    fn lexicon_rejects_empty_entries() {
        let err = Lexicon::from_json(r#"{"abbreviations": {"x": []}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLexicon(_)));
        let err = Lexicon::from_json(r#"{"auto_text": {"x": ""}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLexicon(_)));
        let err = Lexicon::from_json(r#"{"words": [{"word": ""}]}"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid lexicon entry: word #0 is empty");
    }

    #[test]
    fn abbreviations_match_case_insensitively() {
        let source = source();
        let lookup = |text: &str| {
            let word = TypedWord::from_text(text);
            collect(&source, SourceKind::Abbreviation, &word)
        };
        assert_eq!(lookup("WFH"), vec!["work from home"]);
        assert_eq!(lookup("brb"), vec!["be right back", "bathroom break"]);
        assert!(lookup("wf").is_empty());
    }

    #[test]
    fn auto_text_replaces_whole_word() {
        let source = source();
        let lookup = |text: &str| {
            let word = TypedWord::from_text(text);
            collect(&source, SourceKind::AutoText, &word)
        };
        assert_eq!(lookup("i"), vec!["I"]);
        assert!(lookup("ill").is_empty());
    }

    #[test]
    fn dictionary_matches_prefix_by_frequency() {
        let source = source();
        let word = TypedWord::from_text("hel");
        assert_eq!(
            collect(&source, SourceKind::Dictionary, &word),
            vec!["help", "hello", "hell", "Helsinki"]
        );
    }

    #[test]
    fn dictionary_honours_alternate_key_codes() {
        let source = source();
        let mut word = TypedWord::new();
        word.push('h', &['j']);
        word.push('e', &[]);
        word.push('l', &[]);
        word.push('l', &[]);
        assert_eq!(
            collect(&source, SourceKind::Dictionary, &word),
            vec!["hello", "jelly", "hell"]
        );
    }

    #[test]
    fn dictionary_result_count_is_limited() {
        let mut source = source();
        source.set_max_dictionary_results(2);
        let word = TypedWord::from_text("h");
        assert_eq!(
            collect(&source, SourceKind::Dictionary, &word),
            vec!["help", "hello"]
        );
    }

    #[test]
    fn overlong_word_is_refused() {
        let source = source();
        let word = TypedWord::from_text(&"a".repeat(MAX_WORD_CHARS + 1));
        let mut collector = CandidateCollector::new(SourceKind::Dictionary);
        let err = source.suggestions(&word, &mut collector).unwrap_err();
        match err {
            SourceError::WordTooLong { len, max } => assert_eq!((len, max), (256, 255)),
            other => panic!("expected WordTooLong, got {other:?}"),
        }
    }

    #[test]
    fn incognito_lookups_are_not_counted() {
        let mut source = source();
        let word = TypedWord::from_text("he");
        collect(&source, SourceKind::Dictionary, &word);
        assert_eq!(source.lookups_served(), 1);
        source.set_incognito_mode(true);
        assert!(source.is_incognito_mode());
        collect(&source, SourceKind::Dictionary, &word);
        assert_eq!(source.lookups_served(), 1);
    }
}
