// Candidates, source priorities and the merged suggestion list

use std::fmt;

/// Identity of the dictionary that produced a candidate.
///
/// Sources number their dictionaries however they like; the engine only
/// carries the id along for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DictionaryId(pub u32);

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dict#{}", self.0)
    }
}

/// The three lookups a suggestion source offers, in query priority order.
///
/// The derived `Ord` is the priority: `Abbreviation < AutoText < Dictionary`,
/// lower is queried first and wins the authoritative slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    /// Abbreviation expansion ("wfh" -> "work from home").
    Abbreviation,
    /// Fixed auto-replacements ("i" -> "I").
    AutoText,
    /// Dictionary-based suggestions.
    Dictionary,
}

impl SourceKind {
    /// All kinds, in query order.
    pub const ALL: [SourceKind; 3] = [
        SourceKind::Abbreviation,
        SourceKind::AutoText,
        SourceKind::Dictionary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Abbreviation => "abbreviations",
            SourceKind::AutoText => "auto-text",
            SourceKind::Dictionary => "dictionary",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A word reported by a suggestion source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The suggested text.
    pub text: String,
    /// Opaque frequency/ordering value from the source. Never used to
    /// reorder candidates across sources.
    pub score: i32,
    /// Dictionary that produced the candidate, if the source names one.
    pub origin: Option<DictionaryId>,
}

/// One entry of a [`SuggestionList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSlot {
    /// Display text.
    pub text: String,
    /// True when a source endorsed this exact string.
    pub validated: bool,
    /// Highest-priority source that endorsed the slot.
    pub endorsed_by: Option<SourceKind>,
}

impl SuggestionSlot {
    /// An unendorsed slot, used for the typed word.
    pub fn typed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            validated: false,
            endorsed_by: None,
        }
    }
}

/// The ordered, de-duplicated output of one query.
///
/// Slot 0 holds the literally typed word. The authoritative index, when
/// present, names the slot a caller may use to auto-correct the typed
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionList {
    slots: Vec<SuggestionSlot>,
    authoritative: Option<usize>,
}

impl SuggestionList {
    /// Build a list from merged slots.
    ///
    /// An authoritative index outside the slots is discarded.
    pub fn new(slots: Vec<SuggestionSlot>, authoritative: Option<usize>) -> Self {
        let authoritative = authoritative.filter(|&i| i < slots.len());
        Self {
            slots,
            authoritative,
        }
    }

    /// A list holding only the typed word, or nothing for an empty word.
    pub fn typed_only(typed: &str) -> Self {
        if typed.is_empty() {
            return Self::default();
        }
        Self::new(vec![SuggestionSlot::typed(typed)], None)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Text of the slot at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|s| s.text.as_str())
    }

    /// Slot texts, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.text.as_str())
    }

    /// Slot texts collected into owned strings.
    pub fn to_vec(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.text.clone()).collect()
    }

    pub fn slots(&self) -> &[SuggestionSlot] {
        &self.slots
    }

    /// Whether the slot at `index` was endorsed by a source.
    pub fn is_validated(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.validated)
    }

    /// Index of the authoritative correction, if any.
    pub fn authoritative_index(&self) -> Option<usize> {
        self.authoritative
    }

    /// Text of the authoritative correction, if any.
    pub fn authoritative(&self) -> Option<&str> {
        self.authoritative.and_then(|i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validated(text: &str, kind: SourceKind) -> SuggestionSlot {
        SuggestionSlot {
            text: text.to_string(),
            validated: true,
            endorsed_by: Some(kind),
        }
    }

    #[test]
    fn source_kinds_order_by_priority() {
        assert!(SourceKind::Abbreviation < SourceKind::AutoText);
        assert!(SourceKind::AutoText < SourceKind::Dictionary);
        assert_eq!(SourceKind::ALL[0], SourceKind::Abbreviation);
    }

    #[test]
    fn typed_only_list() {
        let list = SuggestionList::typed_only("hel");
        assert_eq!(list.to_vec(), vec!["hel"]);
        assert_eq!(list.authoritative_index(), None);
        assert!(!list.is_validated(0));
    }

    #[test]
    fn typed_only_empty_word_gives_empty_list() {
        let list = SuggestionList::typed_only("");
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn out_of_range_authoritative_index_is_dropped() {
        let list = SuggestionList::new(vec![SuggestionSlot::typed("a")], Some(3));
        assert_eq!(list.authoritative_index(), None);
    }

    #[test]
    fn accessors() {
        let list = SuggestionList::new(
            vec![
                SuggestionSlot::typed("wfh"),
                validated("work from home", SourceKind::Abbreviation),
            ],
            Some(1),
        );
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.texts().collect::<Vec<_>>(),
            vec!["wfh", "work from home"]
        );
        assert!(list.is_validated(1));
        assert!(!list.is_validated(7));
        assert_eq!(list.authoritative(), Some("work from home"));
        assert_eq!(list.slots()[1].endorsed_by, Some(SourceKind::Abbreviation));
    }

    #[test]
    fn display_names() {
        assert_eq!(SourceKind::AutoText.to_string(), "auto-text");
        assert_eq!(DictionaryId(4).to_string(), "dict#4");
    }
}
