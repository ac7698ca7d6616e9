use serde::{Deserialize, Serialize};

/// Content-indicator flags derived from filename keywords, not file content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSet {
    pub question: bool,
    pub solution: bool,
    pub notes: bool,
    pub series_marker: bool,
}

impl TagSet {
    /// True when no content tag is set. A series marker alone does not count;
    /// such documents fall through to the notes category.
    pub fn is_untagged(&self) -> bool {
        !(self.question || self.solution || self.notes)
    }

    pub fn question_only(&self) -> bool {
        self.question && !self.solution
    }

    pub fn solution_only(&self) -> bool {
        self.solution && !self.question
    }
}

/// One input filename after normalization and tagging. Immutable for the rest
/// of the run. `id` is the position in the input sequence, so duplicate
/// filenames stay distinct records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: usize,
    pub raw_name: String,
    pub stem: String,
    pub tokens: Vec<String>,
    pub tags: TagSet,
}

/// Scored (question, solution) combination, indices into the role partitions.
/// Produced for every combination, consumed by the matcher and discarded.
#[derive(Debug, Clone, Copy)]
pub struct PairCandidate {
    pub question: usize,
    pub solution: usize,
    pub score: f32,
}

/// An accepted question/solution pair. Each document appears in at most one.
#[derive(Debug, Clone, Serialize)]
pub struct PairAssignment {
    pub question: DocumentRecord,
    pub solution: DocumentRecord,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StandaloneNotes,
    StandaloneQuestions,
    StandaloneSolutions,
    NotesWithQuestions,
    NotesWithSolutions,
    CombinedQuestionSolution,
}

/// Category decision for a document that did not end up in a pair.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub document: DocumentRecord,
    pub category: Category,
    /// Name of the rule-table entry that fired.
    pub rule: &'static str,
}
