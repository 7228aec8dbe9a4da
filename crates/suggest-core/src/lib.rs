//! Shared types for the keystroke suggestion engine.
//!
//! - [`character`] -- simple case conversion and case-insensitive comparison
//! - [`case`] -- case-pattern detection and mirroring
//! - [`typed_word`] -- the per-word typed-input state
//! - [`suggestion`] -- candidates, source priorities and the merged suggestion list

pub mod case;
pub mod character;
pub mod suggestion;
pub mod typed_word;

pub use suggestion::{Candidate, DictionaryId, SourceKind, SuggestionList, SuggestionSlot};
pub use typed_word::TypedWord;
