// Candidate collector handed to each suggestion-source lookup

use suggest_core::{Candidate, DictionaryId, SourceKind};

/// Accumulates the words one lookup reports.
///
/// The collector does no deduplication or ranking; that is the merge
/// step's job. It only rejects reports that do not describe a real slice
/// of text.
#[derive(Debug)]
pub struct CandidateCollector {
    kind: SourceKind,
    candidates: Vec<Candidate>,
    rejected: usize,
}

impl CandidateCollector {
    /// Create an empty collector for a lookup of the given kind.
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            candidates: Vec::new(),
            rejected: 0,
        }
    }

    /// Lookup kind this collector serves.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Report `word[offset..offset + length]` as a candidate.
    ///
    /// Returns `false` when the report is malformed (empty, or a range
    /// outside `word`) and was dropped.
    pub fn add_word(
        &mut self,
        word: &[char],
        offset: usize,
        length: usize,
        score: i32,
        origin: Option<DictionaryId>,
    ) -> bool {
        let end = match offset.checked_add(length) {
            Some(end) if length > 0 && end <= word.len() => end,
            _ => {
                log::trace!(
                    "{}: dropped candidate slice {offset}+{length} of {} chars",
                    self.kind,
                    word.len()
                );
                self.rejected += 1;
                return false;
            }
        };
        self.candidates.push(Candidate {
            text: word[offset..end].iter().collect(),
            score,
            origin,
        });
        true
    }

    /// Report a whole string as a candidate.
    pub fn add(&mut self, text: &str, score: i32, origin: Option<DictionaryId>) -> bool {
        if text.is_empty() {
            log::trace!("{}: dropped empty candidate", self.kind);
            self.rejected += 1;
            return false;
        }
        self.candidates.push(Candidate {
            text: text.to_string(),
            score,
            origin,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of malformed reports dropped so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn add_word_takes_the_requested_slice() {
        let mut collector = CandidateCollector::new(SourceKind::Abbreviation);
        let buffer = chars("xxwork from homexx");
        let origin = Some(DictionaryId(3));
        assert!(collector.add_word(&buffer, 2, 14, 23, origin));
        assert_eq!(collector.len(), 1);
        let candidate = &collector.candidates()[0];
        assert_eq!(candidate.text, "work from home");
        assert_eq!(candidate.score, 23);
        assert_eq!(candidate.origin, Some(DictionaryId(3)));
    }

    #[test]
    fn length_past_the_end_is_dropped() {
        let mut collector = CandidateCollector::new(SourceKind::Dictionary);
        let buffer = chars("hate");
        assert!(!collector.add_word(&buffer, 0, 5, 23, None));
        assert!(!collector.add_word(&buffer, 4, 1, 23, None));
        assert!(collector.is_empty());
        assert_eq!(collector.rejected(), 2);
    }

    #[test]
    fn overflowing_range_is_dropped() {
        let mut collector = CandidateCollector::new(SourceKind::Dictionary);
        let buffer = chars("hate");
        assert!(!collector.add_word(&buffer, usize::MAX, 2, 1, None));
        assert_eq!(collector.rejected(), 1);
    }

    #[test]
    fn empty_candidates_are_dropped() {
        let mut collector = CandidateCollector::new(SourceKind::AutoText);
        assert!(!collector.add_word(&chars("I"), 0, 0, 1, None));
        assert!(!collector.add("", 1, None));
        assert!(collector.is_empty());
        assert_eq!(collector.rejected(), 2);
    }

    #[test]
    fn reported_order_is_preserved() {
        let mut collector = CandidateCollector::new(SourceKind::Dictionary);
        collector.add("hello", 5, None);
        collector.add("help", 9, None);
        collector.add("hello", 1, None);
        let texts: Vec<_> = collector
            .into_candidates()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["hello", "help", "hello"]);
    }
}
