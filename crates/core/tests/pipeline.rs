use edupair_core::config::MatchConfig;
use edupair_core::models::Category;
use edupair_core::pipeline::Pipeline;
use edupair_core::report::{Disposition, Report};

fn run(names: &[&str]) -> Report {
    let pipeline = Pipeline::new(MatchConfig::default()).unwrap();
    pipeline.run(&names.iter().map(|s| s.to_string()).collect::<Vec<_>>())
}

#[test]
fn matching_question_and_answer_form_a_pair() {
    let report = run(&["chapter1_question.pdf", "chapter1_answer.pdf"]);
    assert_eq!(report.pairs.len(), 1);
    let pair = &report.pairs[0];
    assert_eq!(pair.question.raw_name, "chapter1_question.pdf");
    assert_eq!(pair.solution.raw_name, "chapter1_answer.pdf");
    assert!(pair.score >= 0.5);
    assert!(report.classifications.is_empty());
    assert_eq!(
        report.entries[0].disposition,
        Disposition::Question {
            partner: "chapter1_answer.pdf".to_string(),
            pair: 1
        }
    );
}

#[test]
fn lone_notes_file_is_standalone_notes() {
    let report = run(&["physics_notes.pdf"]);
    assert!(report.pairs.is_empty());
    assert_eq!(report.classifications.len(), 1);
    assert_eq!(report.classifications[0].category, Category::StandaloneNotes);
}

#[test]
fn question_abbreviation_alone_is_standalone_questions() {
    let report = run(&["bmq_set3.pdf"]);
    assert_eq!(report.classifications.len(), 1);
    assert_eq!(
        report.classifications[0].category,
        Category::StandaloneQuestions
    );
}

#[test]
fn lecture_with_worked_solutions_is_notes_with_solutions() {
    let report = run(&["lecture5_with_worked_solutions.pdf"]);
    assert_eq!(report.classifications.len(), 1);
    assert_eq!(
        report.classifications[0].category,
        Category::NotesWithSolutions
    );
}

#[test]
fn combined_document_is_never_paired() {
    // Carries both markers, so it must not pair with the lone solution file
    // even though the stems are close.
    let report = run(&["exam_qna_combined.pdf", "exam_solutions.pdf"]);
    assert!(report.pairs.is_empty());
    let combined = report
        .classifications
        .iter()
        .find(|c| c.document.raw_name == "exam_qna_combined.pdf")
        .unwrap();
    assert_eq!(combined.category, Category::CombinedQuestionSolution);
}

#[test]
fn losing_question_falls_through_to_standalone() {
    let report = run(&[
        "calculus_set2_questions.pdf",
        "calculus_questions.pdf",
        "calculus_set2_answers.pdf",
    ]);
    assert_eq!(report.pairs.len(), 1);
    assert_eq!(
        report.pairs[0].question.raw_name,
        "calculus_set2_questions.pdf"
    );
    assert_eq!(report.classifications.len(), 1);
    assert_eq!(
        report.classifications[0].document.raw_name,
        "calculus_questions.pdf"
    );
    assert_eq!(
        report.classifications[0].category,
        Category::StandaloneQuestions
    );
}

#[test]
fn every_document_gets_exactly_one_disposition() {
    let names = [
        "chapter1_question.pdf",
        "chapter1_answer.pdf",
        "physics_notes.pdf",
        "bmq_set3.pdf",
        "exam_qna_combined.pdf",
        "",
        "....pdf",
        "lecture5_with_worked_solutions.pdf",
    ];
    let report = run(&names);
    assert_eq!(report.entries.len(), names.len());
    let covered = report.pairs.len() * 2 + report.classifications.len();
    assert_eq!(covered, names.len());
    for (name, entry) in names.iter().zip(&report.entries) {
        assert_eq!(&entry.file, name);
    }
}

#[test]
fn empty_input_yields_empty_report() {
    let report = run(&[]);
    assert!(report.is_empty());
    assert!(report.pairs.is_empty());
    assert!(report.classifications.is_empty());
}

#[test]
fn nameless_documents_default_to_notes() {
    let report = run(&["", "???.pdf"]);
    assert_eq!(report.classifications.len(), 2);
    for c in &report.classifications {
        assert_eq!(c.category, Category::StandaloneNotes);
        assert_eq!(c.rule, "notes_fallback");
    }
}

#[test]
fn duplicate_filenames_are_independent_records() {
    let report = run(&["physics_notes.pdf", "physics_notes.pdf"]);
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.classifications.len(), 2);
    assert_eq!(report.classifications[0].document.id, 0);
    assert_eq!(report.classifications[1].document.id, 1);
}

#[test]
fn identical_runs_produce_identical_reports() {
    let names = [
        "waves_b_questions.pdf",
        "waves_a_questions.pdf",
        "waves_answers.pdf",
        "chapter2_notes.pdf",
        "bmq_set1.pdf",
        "bmq_set1_soln.pdf",
    ];
    let a = serde_json::to_string(&run(&names)).unwrap();
    let b = serde_json::to_string(&run(&names)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn report_entries_serialize_to_the_documented_shape() {
    let report = run(&["chapter1_question.pdf", "chapter1_answer.pdf", "h2_notes.pdf"]);
    let json = serde_json::to_value(&report.entries).unwrap();
    assert_eq!(json[0]["role"], "question");
    assert_eq!(json[0]["partner"], "chapter1_answer.pdf");
    assert_eq!(json[1]["role"], "solution");
    assert_eq!(json[2]["role"], "standalone");
    assert_eq!(json[2]["category"], "standalone_notes");
}
