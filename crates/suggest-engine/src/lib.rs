//! Suggestion aggregation for a keystroke-driven text input.
//!
//! Given the word typed so far, the engine asks a [`SuggestionSource`] for
//! abbreviation expansions, auto-text replacements and dictionary
//! suggestions (in that order), merges the answers against the literal
//! typed word and reports which slot, if any, is an authoritative
//! correction.
//!
//! # Architecture
//!
//! - [`source`] -- the lookup collaborator trait and its error type
//! - [`collector`] -- per-lookup candidate accumulator
//! - [`config`] -- correction mode and engine configuration
//! - [`merge`] -- ordered, case-insensitive merge of candidate batches
//! - [`engine`] -- query orchestration and the last-result cache
//! - [`memory`] -- an in-memory lexicon source

pub mod collector;
pub mod config;
pub mod engine;
pub mod memory;
pub mod merge;
pub mod source;

pub use collector::CandidateCollector;
pub use config::{ConfigError, CorrectionMode, SuggestConfig};
pub use engine::SuggestEngine;
pub use memory::{Lexicon, MemorySource};
pub use source::{SourceError, SuggestionSource};
pub use suggest_core::{DictionaryId, SourceKind, SuggestionList, TypedWord};
