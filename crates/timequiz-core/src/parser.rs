//! CSV record parser.
//!
//! Loads quiz records from `question,answer` CSV files and validates them.
//! Any bad row fails the whole file; there is no best-effort recovery.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::QuizError;
use crate::model::Record;

/// Convert raw rows into records, preserving order.
///
/// Field 0 becomes the question verbatim, field 1 the trimmed expected
/// answer. Extra fields are ignored. A row with fewer than two fields fails
/// the whole batch.
pub fn parse_rows<I, R, S>(rows: I) -> Result<Vec<Record>, QuizError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row.as_ref() {
            [question, answer, ..] => {
                let question: &str = question.as_ref();
                Ok(Record::new(question, answer.as_ref()))
            }
            short => Err(QuizError::RowShape {
                row: i + 1,
                fields: short.len(),
            }),
        })
        .collect()
}

/// Decode CSV from any reader and parse its rows into records.
///
/// The whole table is decoded before any row is inspected, so a structural
/// CSV error anywhere wins over a short row earlier in the file.
pub fn parse_csv_reader<R: Read>(reader: R) -> Result<Vec<Record>, QuizError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let table = csv_reader
        .records()
        .collect::<Result<Vec<_>, csv::Error>>()?;

    let records = parse_rows(table.iter().map(|row| row.iter().collect::<Vec<_>>()))?;
    tracing::debug!(count = records.len(), "parsed quiz records");
    Ok(records)
}

/// Parse CSV text into records (useful for testing).
pub fn parse_csv_str(content: &str) -> Result<Vec<Record>, QuizError> {
    parse_csv_reader(content.as_bytes())
}

/// Open a CSV file and parse it into records.
pub fn load_records(path: &Path) -> Result<Vec<Record>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv_reader(file)
}

/// A non-fatal finding from record validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based row the warning refers to.
    pub row: usize,
    pub message: String,
}

/// Check parsed records for entries that are legal but probably unintended.
pub fn validate_records(records: &[Record]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for (i, record) in records.iter().enumerate() {
        let row = i + 1;
        if record.question().trim().is_empty() {
            warnings.push(ValidationWarning {
                row,
                message: "question is empty".into(),
            });
        }
        if record.expected_answer().is_empty() {
            warnings.push(ValidationWarning {
                row,
                message: "expected answer is empty".into(),
            });
        }
        if !seen.insert(record.question()) {
            warnings.push(ValidationWarning {
                row,
                message: format!("duplicate question: {}", record.question()),
            });
        }
    }

    warnings
}
