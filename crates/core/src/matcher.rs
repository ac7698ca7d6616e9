//! Greedy question/solution pairing over scored candidates.

use crate::models::{DocumentRecord, PairAssignment, PairCandidate};
use crate::scorer::Scorer;
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub pairs: Vec<PairAssignment>,
    pub unmatched_questions: Vec<DocumentRecord>,
    pub unmatched_solutions: Vec<DocumentRecord>,
}

/// Scores every (question, solution) combination and accepts candidates
/// greedily, best first, while both endpoints are free and the score clears
/// the threshold. Ties break on the question's raw name, then the solution's,
/// so runs are deterministic. Greedy is an accepted approximation of
/// maximum-weight matching; the result is always a valid matching.
pub fn match_pairs(
    questions: &[DocumentRecord],
    solutions: &[DocumentRecord],
    scorer: &Scorer,
    threshold: f32,
) -> MatchOutcome {
    let mut candidates: Vec<PairCandidate> = Vec::new();
    for (qi, q) in questions.iter().enumerate() {
        for (si, s) in solutions.iter().enumerate() {
            let score = scorer.score(q, s);
            if score >= threshold {
                candidates.push(PairCandidate {
                    question: qi,
                    solution: si,
                    score,
                });
            }
        }
    }

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                questions[a.question]
                    .raw_name
                    .cmp(&questions[b.question].raw_name)
            })
            .then_with(|| {
                solutions[a.solution]
                    .raw_name
                    .cmp(&solutions[b.solution].raw_name)
            })
    });

    let mut used_q = vec![false; questions.len()];
    let mut used_s = vec![false; solutions.len()];
    let mut pairs = Vec::new();

    for cand in candidates {
        if used_q[cand.question] || used_s[cand.solution] {
            continue;
        }
        used_q[cand.question] = true;
        used_s[cand.solution] = true;
        debug!(
            question = %questions[cand.question].raw_name,
            solution = %solutions[cand.solution].raw_name,
            score = cand.score,
            "accepted pair"
        );
        pairs.push(PairAssignment {
            question: questions[cand.question].clone(),
            solution: solutions[cand.solution].clone(),
            score: cand.score,
        });
    }

    let unmatched_questions = questions
        .iter()
        .zip(&used_q)
        .filter(|(_, used)| !**used)
        .map(|(d, _)| d.clone())
        .collect();
    let unmatched_solutions = solutions
        .iter()
        .zip(&used_s)
        .filter(|(_, used)| !**used)
        .map(|(d, _)| d.clone())
        .collect();

    MatchOutcome {
        pairs,
        unmatched_questions,
        unmatched_solutions,
    }
}
