//! Core data model types for timequiz.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One question paired with the answer that scores a point.
///
/// Records are immutable once parsed and have no identity beyond their
/// position in the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    question: String,
    expected_answer: String,
}

impl Record {
    /// Build a record from raw fields. The expected answer is trimmed, the
    /// question is kept verbatim.
    pub fn new(question: impl Into<String>, expected_answer: &str) -> Self {
        Self {
            question: question.into(),
            expected_answer: expected_answer.trim().to_string(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }

    /// Exact, case-sensitive comparison. The submitted answer is not trimmed.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.expected_answer
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.question, self.expected_answer)
    }
}
