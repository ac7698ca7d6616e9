//! Single-pass run: filenames → normalize → tag → pair → classify → report.

use crate::classifier::{self, ClassificationRule};
use crate::config::{ConfigError, MatchConfig};
use crate::matcher;
use crate::models::{ClassificationResult, DocumentRecord};
use crate::normalizer::normalize;
use crate::report::Report;
use crate::scorer::Scorer;
use crate::tagger::Tagger;
use std::collections::HashSet;
use tracing::{debug, info};

pub struct Pipeline {
    tagger: Tagger,
    scorer: Scorer,
    threshold: f32,
    rules: &'static [ClassificationRule],
}

impl Pipeline {
    /// Validates the configuration up front; a bad threshold or empty keyword
    /// set never gets as far as a run.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scorer = Scorer::new(&config);
        Ok(Self {
            tagger: Tagger::new(config.keywords),
            scorer,
            threshold: config.threshold,
            rules: classifier::RULES,
        })
    }

    /// Processes one batch of filenames. Infallible: empty input yields an
    /// empty report, unparseable names fall through to the notes category.
    pub fn run(&self, filenames: &[String]) -> Report {
        let docs: Vec<DocumentRecord> = filenames
            .iter()
            .enumerate()
            .map(|(id, name)| {
                let (stem, tokens) = normalize(name);
                let tags = self.tagger.tag(&tokens);
                debug!(file = %name, ?tags, "tagged");
                DocumentRecord {
                    id,
                    raw_name: name.clone(),
                    stem,
                    tokens,
                    tags,
                }
            })
            .collect();

        // Combined Q+S documents are excluded from pairing and go straight to
        // classification.
        let questions: Vec<DocumentRecord> = docs
            .iter()
            .filter(|d| d.tags.question_only())
            .cloned()
            .collect();
        let solutions: Vec<DocumentRecord> = docs
            .iter()
            .filter(|d| d.tags.solution_only())
            .cloned()
            .collect();

        let outcome = matcher::match_pairs(&questions, &solutions, &self.scorer, self.threshold);
        info!(
            documents = docs.len(),
            questions = questions.len(),
            solutions = solutions.len(),
            pairs = outcome.pairs.len(),
            "matching complete"
        );

        let paired: HashSet<usize> = outcome
            .pairs
            .iter()
            .flat_map(|p| [p.question.id, p.solution.id])
            .collect();

        // Classify in input order so results are reproducible.
        let classifications: Vec<ClassificationResult> = docs
            .iter()
            .filter(|d| !paired.contains(&d.id))
            .map(|d| {
                let (category, rule) = classifier::classify(self.rules, d.tags);
                ClassificationResult {
                    document: d.clone(),
                    category,
                    rule,
                }
            })
            .collect();
        info!(standalone = classifications.len(), "classification complete");

        Report::build(filenames, outcome.pairs, classifications)
    }
}
