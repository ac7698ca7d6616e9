//! Derives content-indicator tags from a normalized token sequence.

use crate::config::KeywordConfig;
use crate::models::TagSet;

pub struct Tagger {
    keywords: KeywordConfig,
}

impl Tagger {
    pub fn new(keywords: KeywordConfig) -> Self {
        Self { keywords }
    }

    /// Tags are non-exclusive: a filename may carry QUESTION and SOLUTION at
    /// once (a combined document), or NOTES plus QUESTION. Series words imply
    /// NOTES only when no question/solution marker co-occurs.
    pub fn tag(&self, tokens: &[String]) -> TagSet {
        let k = &self.keywords;
        let combined = any_abbreviation(tokens, &k.combined_abbreviations);
        let solution = any_keyword(tokens, &k.solution)
            || any_abbreviation(tokens, &k.solution_abbreviations)
            || combined;
        // A question abbreviation with a solution marker in the same name
        // ("bmq_set1_soln") names the solution document, not a combined one.
        let question = any_keyword(tokens, &k.question)
            || combined
            || (!solution && any_abbreviation(tokens, &k.question_abbreviations));
        let series_marker = any_keyword(tokens, &k.series);
        let mut notes = any_keyword(tokens, &k.notes);
        if series_marker && !question && !solution {
            notes = true;
        }
        TagSet {
            question,
            solution,
            notes,
            series_marker,
        }
    }
}

fn any_keyword(tokens: &[String], keywords: &[String]) -> bool {
    tokens
        .iter()
        .any(|t| keywords.iter().any(|k| matches_keyword(t, k)))
}

/// Abbreviations match as substrings ("bmq_set3" → "bmq"), unlike the exact
/// keyword lists.
fn any_abbreviation(tokens: &[String], abbreviations: &[String]) -> bool {
    tokens
        .iter()
        .any(|t| abbreviations.iter().any(|a| !a.is_empty() && t.contains(a.as_str())))
}

/// Exact match, or the keyword with a trailing number glued on ("lecture5",
/// "chapter12"). The trailing digits stay in the token for the scorer.
fn matches_keyword(token: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    if token == keyword {
        return true;
    }
    token
        .strip_prefix(keyword)
        .map(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    fn tag(name: &str) -> TagSet {
        let tagger = Tagger::new(KeywordConfig::default());
        tagger.tag(&normalize(name).1)
    }

    #[test]
    fn question_and_solution_keywords() {
        assert!(tag("chapter1_question.pdf").question);
        assert!(!tag("chapter1_question.pdf").solution);
        let t = tag("chapter1_answer.pdf");
        assert!(t.solution && !t.question);
    }

    #[test]
    fn abbreviations_match_as_substrings() {
        let t = tag("bmq_set3.pdf");
        assert!(t.question);
        assert!(!t.solution);
        // "qna" implies both sides of a combined document.
        let t = tag("exam_qna_combined.pdf");
        assert!(t.question && t.solution);
    }

    #[test]
    fn question_abbreviation_defers_to_a_solution_marker() {
        let t = tag("bmq_set1_soln.pdf");
        assert!(t.solution);
        assert!(!t.question);
    }

    #[test]
    fn keyword_with_trailing_digits() {
        let t = tag("lecture5_with_worked_solutions.pdf");
        assert!(t.notes);
        assert!(t.solution);
        assert!(!t.question);
    }

    #[test]
    fn series_word_alone_implies_notes() {
        let t = tag("chapter3_thermodynamics.pdf");
        assert!(t.notes);
        assert!(t.series_marker);
    }

    #[test]
    fn series_word_with_question_marker_does_not_imply_notes() {
        let t = tag("chapter3_questions.pdf");
        assert!(t.question);
        assert!(t.series_marker);
        assert!(!t.notes);
    }

    #[test]
    fn untagged_when_nothing_matches() {
        let t = tag("physics.pdf");
        assert!(t.is_untagged());
        assert!(tag("").is_untagged());
    }
}
