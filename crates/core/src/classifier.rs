//! Ordered rule table assigning a category to every unpaired document.

use crate::models::{Category, TagSet};

/// One entry of the classification table. Entries are evaluated top to
/// bottom and the first match wins; the order is part of the contract, not
/// an implementation detail.
pub struct ClassificationRule {
    pub name: &'static str,
    pub category: Category,
    applies: fn(TagSet) -> bool,
}

/// Question+solution dominates notes, so a combined document with note
/// markers still lands in the combined category. The final entry always
/// matches: untagged documents default to notes.
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        name: "combined_qs_with_notes",
        category: Category::CombinedQuestionSolution,
        applies: |t| t.question && t.solution && t.notes,
    },
    ClassificationRule {
        name: "combined_qs",
        category: Category::CombinedQuestionSolution,
        applies: |t| t.question && t.solution,
    },
    ClassificationRule {
        name: "notes_with_questions",
        category: Category::NotesWithQuestions,
        applies: |t| t.notes && t.question && !t.solution,
    },
    ClassificationRule {
        name: "notes_with_solutions",
        category: Category::NotesWithSolutions,
        applies: |t| t.notes && t.solution && !t.question,
    },
    ClassificationRule {
        name: "question_only",
        category: Category::StandaloneQuestions,
        applies: |t| t.question && !t.solution && !t.notes,
    },
    ClassificationRule {
        name: "solution_only",
        category: Category::StandaloneSolutions,
        applies: |t| t.solution && !t.question && !t.notes,
    },
    ClassificationRule {
        name: "notes_fallback",
        category: Category::StandaloneNotes,
        applies: |_| true,
    },
];

/// First matching rule, top to bottom. The fallback entry guarantees a hit.
pub fn classify(rules: &[ClassificationRule], tags: TagSet) -> (Category, &'static str) {
    for rule in rules {
        if (rule.applies)(tags) {
            return (rule.category, rule.name);
        }
    }
    (Category::StandaloneNotes, "notes_fallback")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(question: bool, solution: bool, notes: bool) -> TagSet {
        TagSet {
            question,
            solution,
            notes,
            series_marker: false,
        }
    }

    #[test]
    fn combined_dominates_notes() {
        let (cat, rule) = classify(RULES, tags(true, true, true));
        assert_eq!(cat, Category::CombinedQuestionSolution);
        assert_eq!(rule, "combined_qs_with_notes");
    }

    #[test]
    fn combined_without_notes() {
        let (cat, rule) = classify(RULES, tags(true, true, false));
        assert_eq!(cat, Category::CombinedQuestionSolution);
        assert_eq!(rule, "combined_qs");
    }

    #[test]
    fn notes_with_questions_and_with_solutions() {
        assert_eq!(
            classify(RULES, tags(true, false, true)).0,
            Category::NotesWithQuestions
        );
        assert_eq!(
            classify(RULES, tags(false, true, true)).0,
            Category::NotesWithSolutions
        );
    }

    #[test]
    fn single_tag_categories() {
        assert_eq!(
            classify(RULES, tags(true, false, false)).0,
            Category::StandaloneQuestions
        );
        assert_eq!(
            classify(RULES, tags(false, true, false)).0,
            Category::StandaloneSolutions
        );
    }

    #[test]
    fn notes_only_and_untagged_fall_through() {
        assert_eq!(
            classify(RULES, tags(false, false, true)).0,
            Category::StandaloneNotes
        );
        let (cat, rule) = classify(RULES, tags(false, false, false));
        assert_eq!(cat, Category::StandaloneNotes);
        assert_eq!(rule, "notes_fallback");
    }

    #[test]
    fn table_order_is_the_documented_contract() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "combined_qs_with_notes",
                "combined_qs",
                "notes_with_questions",
                "notes_with_solutions",
                "question_only",
                "solution_only",
                "notes_fallback",
            ]
        );
    }
}
