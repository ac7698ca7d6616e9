use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keyword lists driving the tagger and the scorer's residual stripping.
/// Always passed in explicitly so concurrent runs with different lists cannot
/// interfere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Exact-match question indicators.
    pub question: Vec<String>,
    /// Exact-match solution indicators.
    pub solution: Vec<String>,
    /// Exact-match notes indicators.
    pub notes: Vec<String>,
    /// Series/chapter words. These mark a series position ("chapter3", "set2")
    /// and imply notes only when no question/solution marker co-occurs.
    pub series: Vec<String>,
    /// Substring abbreviations that imply a question paper (e.g. "bmq_set3").
    /// Suppressed when a solution marker co-occurs: "bmq_set1_soln" is a
    /// solution, not a combined document.
    pub question_abbreviations: Vec<String>,
    /// Substring abbreviations that imply a solution document.
    pub solution_abbreviations: Vec<String>,
    /// Substring abbreviations that mark both sides at once ("exam_qna").
    pub combined_abbreviations: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        let list = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            question: list(&[
                "question",
                "questions",
                "qn",
                "qns",
                "problem",
                "problems",
                "exercise",
                "exercises",
                "worksheet",
                "worksheets",
                "assignment",
                "assignments",
                "practice",
                "test",
                "exam",
                "quiz",
                "tutorial",
                "revision",
                "paper",
            ]),
            solution: list(&[
                "solution",
                "solutions",
                "soln",
                "solns",
                "sol",
                "sols",
                "answer",
                "answers",
                "ans",
                "worked",
                "key",
                "keys",
            ]),
            notes: list(&[
                "note",
                "notes",
                "lecture",
                "lectures",
                "summary",
                "summaries",
                "theory",
                "concept",
                "guide",
                "handbook",
                "manual",
                "reference",
                "formula",
                "definition",
            ]),
            series: list(&[
                "chapter",
                "chapters",
                "chp",
                "ch",
                "topic",
                "topics",
                "section",
                "sec",
                "part",
                "unit",
                "set",
                "series",
            ]),
            question_abbreviations: list(&["bmq", "apq"]),
            solution_abbreviations: list(&["soln"]),
            combined_abbreviations: list(&["qna"]),
        }
    }
}

impl KeywordConfig {
    pub fn is_empty(&self) -> bool {
        self.question.is_empty() && self.solution.is_empty() && self.notes.is_empty()
    }
}

/// Tunable surface of the matching engine. All fields default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub keywords: KeywordConfig,
    /// Minimum similarity score to accept a question/solution pair.
    pub threshold: f32,
    /// Weight of the token-set Jaccard overlap in the final score.
    pub overlap_weight: f32,
    /// Weight of the residual sequence-similarity ratio.
    pub sequence_weight: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordConfig::default(),
            threshold: 0.5,
            overlap_weight: 0.4,
            sequence_weight: 0.6,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pairing threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f32),
    #[error("scorer weights must be non-negative and sum to a positive value")]
    InvalidWeights,
    #[error("question, solution and notes keyword lists are all empty")]
    EmptyKeywords,
}

impl MatchConfig {
    /// Checked once at pipeline construction so a bad configuration fails
    /// before any scoring happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) || !self.threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        let sum = self.overlap_weight + self.sequence_weight;
        if self.overlap_weight < 0.0
            || self.sequence_weight < 0.0
            || !sum.is_finite()
            || sum <= 0.0
        {
            return Err(ConfigError::InvalidWeights);
        }
        if self.keywords.is_empty() {
            return Err(ConfigError::EmptyKeywords);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let mut cfg = MatchConfig::default();
        cfg.threshold = -0.1;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidThreshold(_))
        ));
        cfg.threshold = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_weights() {
        let mut cfg = MatchConfig::default();
        cfg.overlap_weight = 0.0;
        cfg.sequence_weight = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidWeights)));
        cfg.overlap_weight = -1.0;
        cfg.sequence_weight = 2.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_all_empty_keyword_lists() {
        let mut cfg = MatchConfig::default();
        cfg.keywords.question.clear();
        cfg.keywords.solution.clear();
        cfg.keywords.notes.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyKeywords)));
    }
}
