use interview_scoring::scoring::{Recommendation, ScoringEngine, SessionStatus};
use interview_scoring::transcript::{TranscriptImportError, TranscriptImporter};
use std::io::Write;

const BORDERLINE_CSV: &str = "question_id,difficulty,time_taken,max_time,answer_quality\n\
1,easy,50,60,0.6\n\
2,medium,70,60,0.5\n\
3,medium,55,60,0.7\n";

#[test]
fn imported_transcript_scores_like_the_json_contract() {
    let submission =
        TranscriptImporter::from_reader(BORDERLINE_CSV.as_bytes(), "CAND-3", "QA Engineer")
            .expect("import succeeds");

    assert_eq!(submission.candidate_id, "CAND-3");
    assert_eq!(submission.questions.len(), 3);

    let result = ScoringEngine::default()
        .process(&submission)
        .expect("scores");
    assert_eq!(result.final_score, 59);
    assert_eq!(result.recommendation, Recommendation::Borderline);
    assert_eq!(result.status, SessionStatus::Completed);
}

#[test]
fn importer_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("transcript-{}.csv", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(BORDERLINE_CSV.as_bytes())
            .expect("write transcript");
    }

    let submission =
        TranscriptImporter::from_path(&path, "CAND-4", "QA Engineer").expect("import succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(submission.questions[1].difficulty, "medium");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = TranscriptImporter::from_path("/nonexistent/transcript.csv", "C", "R").unwrap_err();
    assert!(matches!(err, TranscriptImportError::Io(_)));
}
