//! Filename similarity between two normalized documents.

use crate::config::MatchConfig;
use crate::models::DocumentRecord;
use similar::TextDiff;
use std::collections::HashSet;

/// Combines token-set overlap with a character-level sequence ratio, both
/// computed on residual tokens (keyword and year tokens stripped, so
/// "chapter3_question" and "chapter3_answer" compare on "chapter3").
pub struct Scorer {
    overlap_weight: f32,
    sequence_weight: f32,
    keywords: HashSet<String>,
}

impl Scorer {
    pub fn new(config: &MatchConfig) -> Self {
        let mut keywords = HashSet::new();
        for list in [
            &config.keywords.question,
            &config.keywords.solution,
            &config.keywords.notes,
        ] {
            keywords.extend(list.iter().cloned());
        }
        Self {
            overlap_weight: config.overlap_weight,
            sequence_weight: config.sequence_weight,
            keywords,
        }
    }

    /// Score in [0, 1]. Symmetric; identical stems minus keywords score 1.0,
    /// disjoint stems score 0.0.
    pub fn score(&self, a: &DocumentRecord, b: &DocumentRecord) -> f32 {
        let ra = self.residual(&a.tokens);
        let rb = self.residual(&b.tokens);
        if ra.is_empty() || rb.is_empty() {
            return 0.0;
        }

        let sa: HashSet<&str> = ra.iter().copied().collect();
        let sb: HashSet<&str> = rb.iter().copied().collect();
        let shared = sa.intersection(&sb).count() as f32;
        let union = sa.union(&sb).count() as f32;
        let overlap = shared / union;

        let ja = ra.join(" ");
        let jb = rb.join(" ");
        // The diff ratio is computed on a canonical argument ordering so the
        // score stays symmetric.
        let (x, y) = if ja <= jb { (&ja, &jb) } else { (&jb, &ja) };
        let ratio = TextDiff::from_chars(x.as_str(), y.as_str()).ratio();

        (self.overlap_weight * overlap + self.sequence_weight * ratio)
            / (self.overlap_weight + self.sequence_weight)
    }

    /// Tokens left after removing keyword tokens and bare year tokens; these
    /// carry the stem identity used for pairing.
    fn residual<'a>(&self, tokens: &'a [String]) -> Vec<&'a str> {
        tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !self.keywords.contains(*t) && !is_year(t))
            .collect()
    }
}

fn is_year(token: &str) -> bool {
    token.len() == 4
        && (token.starts_with("19") || token.starts_with("20"))
        && token.chars().all(|c| c.is_ascii_digit())
}
