// Suggestion source: the lookup collaborator queried by the engine

use suggest_core::{DictionaryId, SourceKind, TypedWord};

use crate::collector::CandidateCollector;

/// Error reported by a suggestion source.
///
/// The engine never propagates these; a failing lookup is logged and
/// treated as having produced nothing.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The lookup could not be completed.
    #[error("{kind} lookup failed: {reason}")]
    Lookup { kind: SourceKind, reason: String },

    /// A dictionary backing the lookup is not available.
    #[error("{0} is not loaded")]
    Unavailable(DictionaryId),

    /// The typed word is longer than the source can look up.
    #[error("word of {len} characters exceeds the lookup limit of {max}")]
    WordTooLong { len: usize, max: usize },
}

/// Linguistic lookups the engine merges into a suggestion list.
///
/// Each lookup receives the full typed word and a fresh collector and
/// reports zero or more words it recognizes. A lookup must not keep the
/// collector or the typed word beyond the call.
///
/// Lookups take `&self`: a source that tracks usage does so through
/// interior mutability.
pub trait SuggestionSource {
    /// Abbreviation expansions for the typed word.
    fn abbreviations(
        &self,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError>;

    /// Fixed auto-text replacements for the typed word.
    fn auto_text(
        &self,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError>;

    /// Dictionary suggestions for the typed word.
    fn suggestions(
        &self,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError>;

    /// Forward the incognito flag. Its effect belongs to the source.
    fn set_incognito_mode(&mut self, incognito: bool);

    fn is_incognito_mode(&self) -> bool;

    /// Run the lookup of the given kind.
    fn lookup(
        &self,
        kind: SourceKind,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError> {
        match kind {
            SourceKind::Abbreviation => self.abbreviations(word, collector),
            SourceKind::AutoText => self.auto_text(word, collector),
            SourceKind::Dictionary => self.suggestions(word, collector),
        }
    }
}

impl<S: SuggestionSource + ?Sized> SuggestionSource for Box<S> {
    fn abbreviations(
        &self,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError> {
        (**self).abbreviations(word, collector)
    }

    fn auto_text(
        &self,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError> {
        (**self).auto_text(word, collector)
    }

    fn suggestions(
        &self,
        word: &TypedWord,
        collector: &mut CandidateCollector,
    ) -> Result<(), SourceError> {
        (**self).suggestions(word, collector)
    }

    fn set_incognito_mode(&mut self, incognito: bool) {
        (**self).set_incognito_mode(incognito)
    }

    fn is_incognito_mode(&self) -> bool {
        (**self).is_incognito_mode()
    }
}
