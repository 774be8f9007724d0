use clap::Args;
use interview_scoring::config::AppConfig;
use interview_scoring::error::AppError;
use interview_scoring::scoring::{
    example_submission, InterviewResult, InterviewSubmission, QuestionStatus, ScoringEngine,
    ScoringError,
};
use interview_scoring::transcript::TranscriptImporter;
use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON request file (`-` reads stdin)
    #[arg(required_unless_present = "csv", conflicts_with = "csv")]
    pub(crate) input: Option<PathBuf>,
    /// Score a CSV transcript instead of a JSON request
    #[arg(long, requires = "candidate_id")]
    pub(crate) csv: Option<PathBuf>,
    /// Candidate identifier used with --csv
    #[arg(long)]
    pub(crate) candidate_id: Option<String>,
    /// Role used with --csv
    #[arg(long, default_value = "Software Engineer")]
    pub(crate) role: String,
    /// Print the response JSON instead of the readable report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let output = score_report(args, std::io::stdin().lock())?;
    print!("{output}");
    Ok(())
}

/// Score the input named by `args` and render it; `stdin` backs the `-` input.
fn score_report<R: Read>(args: ScoreArgs, stdin: R) -> Result<String, AppError> {
    let ScoreArgs {
        input,
        csv,
        candidate_id,
        role,
        json,
    } = args;

    let config = AppConfig::load()?;
    let engine = ScoringEngine::new(config.scoring);

    let submission = match (csv, input) {
        (Some(path), _) => {
            let candidate_id = candidate_id.unwrap_or_default();
            TranscriptImporter::from_path(path, &candidate_id, &role)?
        }
        (None, Some(path)) => parse_submission(&read_input(&path, stdin)?)?,
        (None, None) => {
            return Err(ScoringError::MalformedInput(
                "no input file or transcript given".to_string(),
            )
            .into())
        }
    };

    let result = engine.process(&submission)?;

    if json {
        let mut rendered = serde_json::to_string_pretty(&result)?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(render_result(&result))
    }
}

pub(crate) fn run_example() -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(&example_submission())?);
    Ok(())
}

fn read_input<R: Read>(path: &Path, mut stdin: R) -> Result<String, AppError> {
    let mut raw = String::new();
    if path.as_os_str() == "-" {
        stdin.read_to_string(&mut raw)?;
    } else {
        raw = std::fs::read_to_string(path)?;
    }
    Ok(raw)
}

fn parse_submission(raw: &str) -> Result<InterviewSubmission, ScoringError> {
    serde_json::from_str(raw).map_err(|err| ScoringError::MalformedInput(err.to_string()))
}

/// Readable report with the scoring timeline, for terminals and demos.
pub(crate) fn render_result(result: &InterviewResult) -> String {
    let mut out = String::new();
    let summary = &result.performance_summary;

    let _ = writeln!(out, "Interview readiness report");
    let _ = writeln!(
        out,
        "Candidate {} ({}), interview {}",
        result.candidate_id, result.role, result.interview_id
    );
    let _ = writeln!(
        out,
        "Final score: {}/100 -> {} [{}]",
        result.final_score,
        result.recommendation.label(),
        result.status.label()
    );
    let _ = writeln!(
        out,
        "Metrics: accuracy {} | time efficiency {} | consistency {}",
        result.metrics.accuracy, result.metrics.time_efficiency, result.metrics.consistency
    );
    let _ = writeln!(
        out,
        "Attempted {} of {} questions | avg time used {:.1}% | {} interruption(s)",
        summary.attempted_questions,
        summary.total_questions,
        summary.average_time_percentage,
        summary.interruption_count
    );

    let _ = writeln!(out, "\nQuestion breakdown");
    for (entry, question) in result.score_breakdown.iter().zip(&result.questions) {
        let status = match question.status {
            QuestionStatus::Passed => "passed",
            QuestionStatus::Failed => "failed",
        };
        let _ = writeln!(
            out,
            "- Q{} {}: raw {:.2}, time -{:.2}, interruptions -{:.2}, weight {:.2} -> {:.2} ({})",
            entry.q_id,
            question.difficulty.label(),
            entry.raw_score,
            entry.time_penalty,
            entry.interruption_penalty,
            entry.adaptive_weight,
            entry.weighted_score,
            status
        );
    }

    let _ = writeln!(out, "\nScoring timeline");
    for entry in &result.state_log {
        let _ = writeln!(
            out,
            "- Q{}: {} (weight {:.2})",
            entry.question,
            entry.state.label(),
            entry.weight
        );
    }

    if let Some(reason) = &result.termination_reason {
        let _ = writeln!(out, "\nEarly termination: {}", reason);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG_REQUEST: &str = r#"{
        "candidate_id": "CAND-21",
        "role": "Backend Engineer",
        "questions": [
            {"question_id": 1, "difficulty": "medium", "time_taken": 45, "max_time": 60, "answer_quality": 0.95},
            {"question_id": 2, "difficulty": "hard", "time_taken": 80, "max_time": 120, "answer_quality": 0.9}
        ]
    }"#;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("write temp input");
        path
    }

    fn score_args(input: Option<PathBuf>, csv: Option<PathBuf>, json: bool) -> ScoreArgs {
        ScoreArgs {
            input,
            csv,
            candidate_id: Some("CAND-CSV".to_string()),
            role: "SRE".to_string(),
            json,
        }
    }

    #[test]
    fn scores_json_file_as_response_json() {
        let path = temp_file("score-request.json", STRONG_REQUEST);

        let output =
            score_report(score_args(Some(path.clone()), None, true), std::io::empty())
                .expect("scores file");
        let _ = std::fs::remove_file(&path);

        let json: serde_json::Value = serde_json::from_str(&output).expect("json output");
        assert_eq!(json["candidate_id"], "CAND-21");
        assert_eq!(json["status"], "Completed");
        assert_eq!(json["questions"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn dash_reads_the_request_from_stdin() {
        let output = score_report(
            score_args(Some(PathBuf::from("-")), None, false),
            STRONG_REQUEST.as_bytes(),
        )
        .expect("scores stdin");

        assert!(output.contains("Candidate CAND-21 (Backend Engineer)"));
        assert!(output.contains("Scoring timeline"));
    }

    #[test]
    fn scores_csv_transcript_with_cli_identity() {
        let path = temp_file(
            "score-transcript.csv",
            "question_id,difficulty,time_taken,max_time,answer_quality,interruptions\n\
1,easy,30,60,0.7,\n\
2,hard,90,120,0.9,1\n",
        );

        let output = score_report(score_args(None, Some(path.clone()), true), std::io::empty())
            .expect("scores transcript");
        let _ = std::fs::remove_file(&path);

        let json: serde_json::Value = serde_json::from_str(&output).expect("json output");
        assert_eq!(json["candidate_id"], "CAND-CSV");
        assert_eq!(json["role"], "SRE");
        assert_eq!(json["performance_summary"]["interruption_count"], 1);
    }

    #[test]
    fn invalid_stdin_request_fails_with_scoring_error() {
        let err = score_report(
            score_args(Some(PathBuf::from("-")), None, true),
            "not json".as_bytes(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Scoring(ScoringError::MalformedInput(_))));
    }

    #[test]
    fn report_includes_timeline_and_termination_notice() {
        let raw = r#"{
            "candidate_id": "CAND-9",
            "role": "SRE",
            "questions": [
                {"question_id": 1, "difficulty": "easy", "time_taken": 20, "max_time": 60, "answer_quality": 0.2},
                {"question_id": 2, "difficulty": "easy", "time_taken": 20, "max_time": 60, "answer_quality": 0.1},
                {"question_id": 3, "difficulty": "easy", "time_taken": 20, "max_time": 60, "answer_quality": 0.1},
                {"question_id": 4, "difficulty": "easy", "time_taken": 20, "max_time": 60, "answer_quality": 0.5}
            ]
        }"#;
        let submission = parse_submission(raw).expect("parses");
        let result = ScoringEngine::default()
            .process(&submission)
            .expect("scores");

        let report = render_result(&result);

        assert!(report.contains("Final score: 13/100 -> no hire [Terminated]"));
        assert!(report.contains("Attempted 3 of 4 questions"));
        assert!(report.contains("- Q3: terminated (weight 0.80)"));
        assert!(report.contains("Early termination: Three consecutive"));
    }

    #[test]
    fn completed_report_omits_termination_notice() {
        let result = ScoringEngine::default()
            .process(&example_submission())
            .expect("scores");

        let report = render_result(&result);

        assert!(report.contains("strong hire [Completed]"));
        assert!(report.contains("- Q1 medium: raw 95.00"));
        assert!(!report.contains("Early termination"));
    }

    #[test]
    fn unparseable_input_is_malformed() {
        let err = parse_submission("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ScoringError::MalformedInput(_)));
    }
}
