// Ordered, case-insensitive merge of candidate batches into a suggestion list
//
// Policy: the first writer of a text keeps its position and display form;
// every later writer of the same text (compared case-insensitively) only
// endorses the existing slot. The authoritative slot is the one endorsed
// by the highest-priority source, and within that source the most recent
// endorsement.

use hashbrown::HashMap;

use suggest_core::case::{CaseType, mirror_case};
use suggest_core::character::fold_case;
use suggest_core::{Candidate, SourceKind, SuggestionList, SuggestionSlot, TypedWord};

use crate::config::SuggestConfig;

/// Endorsement bookkeeping for one slot.
#[derive(Debug, Clone, Copy)]
struct Endorsement {
    kind: SourceKind,
    /// Merge-wide sequence number of the latest endorsement by `kind`.
    seq: u32,
}

#[derive(Debug)]
struct MergeSlot {
    text: String,
    endorsement: Option<Endorsement>,
}

/// Incremental merge state for one query.
///
/// Batches must be fed in priority order; [`merge_candidates`] does that
/// for a complete set.
pub struct SuggestionMerger {
    typed_text: String,
    typed_len: usize,
    typed_key: String,
    case: Option<CaseType>,
    config: SuggestConfig,
    /// Slot 0 is the typed word.
    slots: Vec<MergeSlot>,
    /// Folded text -> slot index, for every slot except the typed word and
    /// its case correction.
    by_key: HashMap<String, usize>,
    /// Slot holding a case-only correction of the typed word ("i" -> "I").
    case_correction: Option<usize>,
    seq: u32,
}

impl SuggestionMerger {
    /// Start a merge seeded with the typed word.
    pub fn new(word: &TypedWord, config: &SuggestConfig) -> Self {
        let typed_text = word.typed_text();
        let typed_key = fold_case(&typed_text);
        let case = if config.mirror_typed_case {
            Some(word.case_type())
        } else {
            None
        };
        Self {
            slots: vec![MergeSlot {
                text: typed_text.clone(),
                endorsement: None,
            }],
            typed_len: word.code_point_count(),
            typed_text,
            typed_key,
            case,
            config: config.clone(),
            by_key: HashMap::new(),
            case_correction: None,
            seq: 0,
        }
    }

    /// Merge one lookup's candidates, in the order the source reported them.
    pub fn merge(&mut self, kind: SourceKind, candidates: &[Candidate]) {
        for candidate in candidates {
            self.merge_one(kind, candidate);
        }
    }

    fn merge_one(&mut self, kind: SourceKind, candidate: &Candidate) {
        if candidate.text.is_empty() {
            return;
        }
        let text = match self.case {
            Some(case) => {
                let mut chars: Vec<char> = candidate.text.chars().collect();
                mirror_case(&mut chars, case);
                chars.into_iter().collect()
            }
            None => candidate.text.clone(),
        };
        let key = fold_case(&text);

        // Dictionary words far from the typed length are weak: listed, but
        // never validated.
        let endorses = kind != SourceKind::Dictionary
            || self
                .config
                .correction
                .accepts_length(self.typed_len, text.chars().count());

        let existing = if key == self.typed_key {
            if text == self.typed_text {
                Some(0)
            } else {
                self.case_correction
            }
        } else {
            self.by_key.get(&key).copied()
        };

        let index = match existing {
            Some(index) => index,
            None => {
                let index = self.slots.len();
                if key == self.typed_key {
                    self.case_correction = Some(index);
                } else {
                    self.by_key.insert(key, index);
                }
                self.slots.push(MergeSlot {
                    text,
                    endorsement: None,
                });
                index
            }
        };

        log::trace!(
            "{kind}: '{}' (score {}) -> slot {index}{}",
            candidate.text,
            candidate.score,
            if endorses { "" } else { ", weak" }
        );

        if endorses {
            self.endorse(index, kind);
        }
    }

    fn endorse(&mut self, index: usize, kind: SourceKind) {
        self.seq += 1;
        let seq = self.seq;
        let slot = &mut self.slots[index];
        slot.endorsement = match slot.endorsement {
            // A lower-priority source never takes a slot over.
            Some(current) if current.kind < kind => Some(current),
            _ => Some(Endorsement { kind, seq }),
        };
    }

    /// Truncate to the configured maximum and pick the authoritative slot.
    pub fn finish(mut self) -> SuggestionList {
        self.slots.truncate(self.config.max_suggestions.max(1));

        let authoritative = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.endorsement.map(|e| (i, e)))
            .min_by(|(_, a), (_, b)| a.kind.cmp(&b.kind).then(b.seq.cmp(&a.seq)))
            .map(|(i, _)| i);

        let slots = self
            .slots
            .into_iter()
            .map(|slot| SuggestionSlot {
                text: slot.text,
                validated: slot.endorsement.is_some(),
                endorsed_by: slot.endorsement.map(|e| e.kind),
            })
            .collect();

        SuggestionList::new(slots, authoritative)
    }
}

/// Merge complete candidate batches into a suggestion list.
///
/// Batches are applied sorted by source priority regardless of the order
/// they are given in, so lookups may be fetched in any order.
pub fn merge_candidates(
    word: &TypedWord,
    config: &SuggestConfig,
    batches: &[(SourceKind, Vec<Candidate>)],
) -> SuggestionList {
    let mut ordered: Vec<&(SourceKind, Vec<Candidate>)> = batches.iter().collect();
    ordered.sort_by_key(|(kind, _)| *kind);

    let mut merger = SuggestionMerger::new(word, config);
    for (kind, candidates) in ordered {
        merger.merge(*kind, candidates);
    }
    merger.finish()
}
