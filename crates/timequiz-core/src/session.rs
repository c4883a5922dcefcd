//! Quiz session runner.
//!
//! Presents records strictly in order, collects one answer per record, and
//! stops either when the records run out or when the session deadline fires.
//! The deadline is a budget for the whole session, not per question.

use std::time::Duration;

use anyhow::Result;
use tokio::time::Instant;
use uuid::Uuid;

use crate::collector::{collect_answer, Collected};
use crate::model::Record;
use crate::report::{ScoreReport, SessionOutcome};
use crate::traits::{AnswerSource, Presenter};

/// Configuration for a quiz session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Whole-session time budget. `None` collects answers without a deadline.
    pub time_limit: Option<Duration>,
}

impl SessionConfig {
    /// Build from a limit in seconds, where 0 means no limit.
    pub fn from_limit_secs(secs: u64) -> Self {
        Self {
            time_limit: (secs > 0).then(|| Duration::from_secs(secs)),
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    /// Waiting on the answer for the record at this 0-based index.
    Presenting(usize),
    TimedOut,
    Exhausted,
    Reported,
}

/// One run of the quiz from first prompt to final report.
#[derive(Debug)]
pub struct QuizSession {
    records: Vec<Record>,
    config: SessionConfig,
    correct_count: usize,
    next_index: usize,
    phase: SessionPhase,
    started_at: Option<Instant>,
}

impl QuizSession {
    pub fn new(records: Vec<Record>, config: SessionConfig) -> Self {
        Self {
            records,
            config,
            correct_count: 0,
            next_index: 0,
            phase: SessionPhase::Idle,
            started_at: None,
        }
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Index of the next record to be answered.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Drive the session to completion and produce its report.
    ///
    /// A session runs once; calling this again is an error.
    pub async fn run(
        &mut self,
        source: &mut dyn AnswerSource,
        presenter: &dyn Presenter,
    ) -> Result<ScoreReport> {
        self.play(source, presenter).await?;
        self.finish()
    }

    /// Present records until they run out or the deadline fires, leaving the
    /// session in `Exhausted` or `TimedOut`.
    pub async fn play(
        &mut self,
        source: &mut dyn AnswerSource,
        presenter: &dyn Presenter,
    ) -> Result<SessionOutcome> {
        anyhow::ensure!(
            self.phase == SessionPhase::Idle,
            "quiz session has already run"
        );

        let start = Instant::now();
        self.started_at = Some(start);
        let deadline = self.config.time_limit.map(|limit| start + limit);
        tracing::info!(
            total = self.records.len(),
            limit = ?self.config.time_limit,
            "quiz session started"
        );

        let outcome = self.answer_all(source, presenter, deadline).await;
        self.phase = match outcome {
            SessionOutcome::Exhausted => SessionPhase::Exhausted,
            SessionOutcome::TimedOut => SessionPhase::TimedOut,
        };
        Ok(outcome)
    }

    /// Build the score report for a finished session. Only one report is
    /// ever produced per session.
    pub fn finish(&mut self) -> Result<ScoreReport> {
        let (outcome, presented) = match self.phase {
            SessionPhase::Exhausted => (SessionOutcome::Exhausted, self.next_index),
            SessionPhase::TimedOut => (SessionOutcome::TimedOut, self.next_index + 1),
            phase => anyhow::bail!("cannot report a quiz session in phase {phase:?}"),
        };
        let elapsed = self
            .started_at
            .map(|start| start.elapsed())
            .unwrap_or_default();
        let total = self.records.len();

        tracing::info!(
            correct = self.correct_count,
            total,
            ?outcome,
            elapsed_ms = elapsed.as_millis() as u64,
            "quiz session finished"
        );

        self.phase = SessionPhase::Reported;
        Ok(ScoreReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            correct: self.correct_count,
            total,
            presented,
            outcome,
            duration_ms: elapsed.as_millis() as u64,
        })
    }

    async fn answer_all(
        &mut self,
        source: &mut dyn AnswerSource,
        presenter: &dyn Presenter,
        deadline: Option<Instant>,
    ) -> SessionOutcome {
        while let Some(record) = self.records.get(self.next_index) {
            let index = self.next_index;
            self.phase = SessionPhase::Presenting(index);
            presenter.on_question(index + 1, record);

            let correct = match collect_answer(source, deadline).await {
                Collected::TimedOut => {
                    tracing::warn!(question = index + 1, "time limit reached");
                    presenter.on_timeout(index + 1);
                    return SessionOutcome::TimedOut;
                }
                Collected::Answered(answer) => record.is_correct(&answer),
                Collected::EndOfInput => {
                    tracing::debug!(question = index + 1, "input ended before an answer");
                    false
                }
            };

            tracing::debug!(question = index + 1, correct, "answer collected");
            if correct {
                self.correct_count += 1;
            }
            self.next_index += 1;
            presenter.on_answer(index + 1, correct);
        }

        SessionOutcome::Exhausted
    }
}
