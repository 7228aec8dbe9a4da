// SuggestEngine: queries the suggestion source per keystroke and merges
// the results.
//
// Design notes:
// - Lookups run strictly in priority order, one at a time, each with its
//   own collector. A lookup that fails contributes nothing.
// - The most recent list is kept behind an `Arc`. A query for the same
//   typed word (same identity and revision) under the same configuration
//   hands back that `Arc` instead of asking the source again.
// - Configuration changes never touch the cached list itself, so
//   `last_valid_suggestion_index` keeps describing the last list returned.

use std::sync::Arc;

use suggest_core::{Candidate, SourceKind, SuggestionList, TypedWord};

use crate::collector::CandidateCollector;
use crate::config::{CorrectionMode, SuggestConfig};
use crate::merge::merge_candidates;
use crate::source::SuggestionSource;

/// What the cached list was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheKey {
    identity: u64,
    revision: u64,
    epoch: u64,
}

/// Orchestrates the suggestion source for the word being typed.
pub struct SuggestEngine<S> {
    source: S,
    config: SuggestConfig,
    /// Advanced on every configuration change.
    epoch: u64,
    last_key: Option<CacheKey>,
    last: Arc<SuggestionList>,
}

impl<S: SuggestionSource> SuggestEngine<S> {
    /// Create an engine with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, SuggestConfig::default())
    }

    /// Create an engine with the given configuration.
    ///
    /// A `max_suggestions` of 0 is raised to 1: the typed word always fits.
    pub fn with_config(source: S, mut config: SuggestConfig) -> Self {
        config.max_suggestions = config.max_suggestions.max(1);
        Self {
            source,
            config,
            epoch: 0,
            last_key: None,
            last: Arc::new(SuggestionList::default()),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Switch correction on or off and set its thresholds.
    ///
    /// - `max_length_diff`: how far a dictionary word's length may be from
    ///   the typed word's for it to be validated
    /// - `min_word_length`: typed code points needed before the dictionary
    ///   is queried
    pub fn set_correction_mode(
        &mut self,
        enabled: bool,
        max_length_diff: usize,
        min_word_length: usize,
    ) {
        self.config.correction = CorrectionMode::new(enabled, max_length_diff, min_word_length);
        self.epoch += 1;
    }

    pub fn set_max_suggestions(&mut self, value: usize) {
        self.config.max_suggestions = value.max(1);
        self.epoch += 1;
    }

    pub fn set_mirror_typed_case(&mut self, value: bool) {
        self.config.mirror_typed_case = value;
        self.epoch += 1;
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Whether the engine is active (queries sources) or idle.
    pub fn is_correction_enabled(&self) -> bool {
        self.config.correction.enabled
    }

    // =========================================================================
    // Incognito pass-through
    // =========================================================================

    pub fn set_incognito_mode(&mut self, incognito: bool) {
        self.source.set_incognito_mode(incognito);
    }

    pub fn is_incognito_mode(&self) -> bool {
        self.source.is_incognito_mode()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Build (or reuse) the suggestion list for `word`.
    ///
    /// Returns the list and its authoritative index. When neither `word`
    /// nor the configuration changed since the previous call, the same
    /// `Arc` is returned and the source is not consulted.
    pub fn query(&mut self, word: &TypedWord) -> (Arc<SuggestionList>, Option<usize>) {
        let key = CacheKey {
            identity: word.identity(),
            revision: word.revision(),
            epoch: self.epoch,
        };
        if self.last_key != Some(key) {
            self.last = Arc::new(self.build(word));
            self.last_key = Some(key);
        }
        let index = self.last.authoritative_index();
        (Arc::clone(&self.last), index)
    }

    /// The suggestion list for `word`; see [`query`](Self::query).
    pub fn suggestions(&mut self, word: &TypedWord) -> Arc<SuggestionList> {
        self.query(word).0
    }

    /// Authoritative index of the most recently returned list.
    ///
    /// `None` when no query has run yet or the last list has no
    /// authoritative correction.
    pub fn last_valid_suggestion_index(&self) -> Option<usize> {
        self.last.authoritative_index()
    }

    fn build(&self, word: &TypedWord) -> SuggestionList {
        let correction = self.config.correction;
        if !correction.enabled || word.is_empty() {
            log::debug!(
                "no lookups for '{}' (correction enabled: {})",
                word.typed_text(),
                correction.enabled
            );
            return SuggestionList::typed_only(&word.typed_text());
        }

        let mut batches: Vec<(SourceKind, Vec<Candidate>)> = Vec::with_capacity(3);
        for kind in SourceKind::ALL {
            if kind == SourceKind::Dictionary
                && !correction.queries_dictionary(word.code_point_count())
            {
                continue;
            }
            let mut collector = CandidateCollector::new(kind);
            match self.source.lookup(kind, word, &mut collector) {
                Ok(()) => {
                    if collector.rejected() > 0 {
                        log::debug!("{kind}: {} malformed reports dropped", collector.rejected());
                    }
                    batches.push((kind, collector.into_candidates()));
                }
                Err(e) => {
                    log::warn!("{kind} lookup for '{}' discarded: {e}", word.typed_text());
                }
            }
        }

        let list = merge_candidates(word, &self.config, &batches);
        log::debug!(
            "'{}': {} suggestions, authoritative {:?}",
            word.typed_text(),
            list.len(),
            list.authoritative_index()
        );
        list
    }

    // =========================================================================
    // Source access
    // =========================================================================

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source.
    ///
    /// The source's answers may change through this handle, so the cached
    /// list is invalidated.
    pub fn source_mut(&mut self) -> &mut S {
        self.epoch += 1;
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
