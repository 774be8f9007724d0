//! CSV transcript import for offline scoring.
//!
//! Rows carry `question_id,difficulty,time_taken,max_time,answer_quality` plus an
//! optional `interruptions` column. Parsing only checks shape; domain validation
//! happens when the engine scores the resulting submission.

use crate::scoring::{AttemptSubmission, InterviewSubmission};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum TranscriptImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for TranscriptImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptImportError::Io(err) => write!(f, "failed to read transcript: {}", err),
            TranscriptImportError::Csv(err) => write!(f, "invalid transcript CSV data: {}", err),
        }
    }
}

impl std::error::Error for TranscriptImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscriptImportError::Io(err) => Some(err),
            TranscriptImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for TranscriptImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TranscriptImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct TranscriptImporter;

impl TranscriptImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        candidate_id: &str,
        role: &str,
    ) -> Result<InterviewSubmission, TranscriptImportError> {
        let file = File::open(path)?;
        Self::from_reader(file, candidate_id, role)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        candidate_id: &str,
        role: &str,
    ) -> Result<InterviewSubmission, TranscriptImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut questions = Vec::new();
        for row in csv_reader.deserialize::<TranscriptRow>() {
            questions.push(row?.into_submission());
        }

        Ok(InterviewSubmission {
            candidate_id: candidate_id.to_string(),
            role: role.to_string(),
            questions,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptRow {
    question_id: i64,
    difficulty: String,
    time_taken: f64,
    max_time: f64,
    answer_quality: f64,
    #[serde(default, deserialize_with = "empty_cell_as_none")]
    interruptions: Option<i64>,
}

impl TranscriptRow {
    fn into_submission(self) -> AttemptSubmission {
        AttemptSubmission {
            question_id: self.question_id,
            difficulty: self.difficulty,
            time_taken: self.time_taken,
            max_time: self.max_time,
            answer_quality: self.answer_quality,
            interruptions: self.interruptions,
        }
    }
}

fn empty_cell_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
