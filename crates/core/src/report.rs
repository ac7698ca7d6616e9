//! Final assignment view: exactly one disposition per input document.

use crate::models::{Category, ClassificationResult, PairAssignment};
use serde::{Deserialize, Serialize};

/// What happened to one document. Pair indices are 1-based to match the
/// `pair_N` directory names the organizer produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Disposition {
    Question { partner: String, pair: usize },
    Solution { partner: String, pair: usize },
    Standalone { category: Category },
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub file: String,
    #[serde(flatten)]
    pub disposition: Disposition,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub pairs: Vec<PairAssignment>,
    pub classifications: Vec<ClassificationResult>,
    /// One entry per input document, in input order.
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Builds the per-document view. The pipeline guarantees that pairs and
    /// classifications together cover every input exactly once.
    pub(crate) fn build(
        input_names: &[String],
        pairs: Vec<PairAssignment>,
        classifications: Vec<ClassificationResult>,
    ) -> Self {
        let mut dispositions: Vec<Option<Disposition>> = vec![None; input_names.len()];
        for (n, pair) in pairs.iter().enumerate() {
            dispositions[pair.question.id] = Some(Disposition::Question {
                partner: pair.solution.raw_name.clone(),
                pair: n + 1,
            });
            dispositions[pair.solution.id] = Some(Disposition::Solution {
                partner: pair.question.raw_name.clone(),
                pair: n + 1,
            });
        }
        for c in &classifications {
            dispositions[c.document.id] = Some(Disposition::Standalone {
                category: c.category,
            });
        }

        let entries = input_names
            .iter()
            .zip(dispositions)
            .map(|(name, d)| ReportEntry {
                file: name.clone(),
                disposition: d.expect("document covered by neither pairing nor classification"),
            })
            .collect();

        Self {
            pairs,
            classifications,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.classifications
            .iter()
            .filter(|c| c.category == category)
            .count()
    }
}
