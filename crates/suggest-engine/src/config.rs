// Correction mode and engine configuration

use serde::{Deserialize, Serialize};

/// Error type for configuration and lexicon loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The suggestion list must have room for at least the typed word.
    #[error("max_suggestions must be at least 1")]
    ZeroMaxSuggestions,

    /// A lexicon entry is unusable.
    #[error("invalid lexicon entry: {0}")]
    InvalidLexicon(String),
}

/// Whether correction runs, and the thresholds that gate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionMode {
    /// When false no source is queried and the list holds only the typed word.
    pub enabled: bool,
    /// Sensitivity: a dictionary candidate is validated only when its
    /// length is within this many code points of the typed word's length.
    /// Longer or shorter dictionary words are listed as weak suggestions
    /// that can never become the authoritative correction.
    pub max_length_diff: usize,
    /// Minimum typed code points before the dictionary is queried.
    /// Abbreviations and auto-text are queried from the first keystroke.
    pub min_word_length: usize,
}

impl CorrectionMode {
    pub fn new(enabled: bool, max_length_diff: usize, min_word_length: usize) -> Self {
        Self {
            enabled,
            max_length_diff,
            min_word_length,
        }
    }

    /// Correction switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Whether a word of `code_point_count` characters reaches the dictionary.
    pub fn queries_dictionary(&self, code_point_count: usize) -> bool {
        code_point_count >= self.min_word_length
    }

    /// Whether a dictionary candidate of `candidate_len` code points is close
    /// enough to a typed word of `typed_len` code points to be validated.
    pub fn accepts_length(&self, typed_len: usize, candidate_len: usize) -> bool {
        typed_len.abs_diff(candidate_len) <= self.max_length_diff
    }
}

impl Default for CorrectionMode {
    fn default() -> Self {
        Self {
            enabled: true,
            max_length_diff: 1,
            min_word_length: 2,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub correction: CorrectionMode,
    /// Maximum number of slots in a suggestion list, typed word included.
    pub max_suggestions: usize,
    /// Capitalize (or upper-case) candidates when the typed word is.
    pub mirror_typed_case: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            correction: CorrectionMode::default(),
            max_suggestions: 12,
            mirror_typed_case: true,
        }
    }
}

impl SuggestConfig {
    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::ZeroMaxSuggestions);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SuggestConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.correction.enabled);
        assert_eq!(config.max_suggestions, 12);
    }

    #[test]
    fn dictionary_gate_is_inclusive() {
        let mode = CorrectionMode::new(true, 1, 2);
        assert!(!mode.queries_dictionary(1));
        assert!(mode.queries_dictionary(2));
        assert!(mode.queries_dictionary(9));
        assert!(CorrectionMode::new(true, 1, 0).queries_dictionary(0));
    }

    #[test]
    fn length_tolerance_is_symmetric() {
        let mode = CorrectionMode::new(true, 1, 2);
        assert!(mode.accepts_length(4, 5));
        assert!(mode.accepts_length(5, 4));
        assert!(mode.accepts_length(5, 5));
        assert!(!mode.accepts_length(3, 5));
        assert!(CorrectionMode::new(true, 5, 2).accepts_length(3, 5));
    }

    #[test]
    fn disabled_keeps_default_thresholds() {
        let mode = CorrectionMode::disabled();
        assert!(!mode.enabled);
        assert_eq!(
            mode.min_word_length,
            CorrectionMode::default().min_word_length
        );
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = SuggestConfig::from_json(r#"{"max_suggestions": 3}"#).unwrap();
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.correction, CorrectionMode::default());
        assert!(config.mirror_typed_case);

        let config =
            SuggestConfig::from_json(r#"{"correction": {"enabled": false, "min_word_length": 4}}"#)
                .unwrap();
        assert!(!config.correction.enabled);
        assert_eq!(config.correction.min_word_length, 4);
        assert_eq!(config.correction.max_length_diff, 1);
    }

    #[test]
    fn from_json_rejects_zero_max_suggestions() {
        match SuggestConfig::from_json(r#"{"max_suggestions": 0}"#) {
            Err(ConfigError::ZeroMaxSuggestions) => {}
            other => panic!("expected ZeroMaxSuggestions, got {other:?}"),
        }
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = SuggestConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
