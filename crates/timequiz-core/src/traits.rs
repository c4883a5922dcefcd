//! Core trait definitions for answer sources and session presentation.
//!
//! Answer sources are implemented by the `timequiz-console` crate; the
//! presenter is implemented by the CLI.

use async_trait::async_trait;

use crate::model::Record;

// ---------------------------------------------------------------------------
// Answer source trait
// ---------------------------------------------------------------------------

/// Where submitted answers come from.
///
/// Implementations must be cancel-safe: the collector drops a pending
/// `next_answer` future when the deadline fires, and a line that arrives
/// afterwards must not be lost or half-consumed.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait for the next submitted line, without its line terminator.
    ///
    /// Returns `None` once input has ended.
    async fn next_answer(&mut self) -> Option<String>;
}

// ---------------------------------------------------------------------------
// Presenter trait
// ---------------------------------------------------------------------------

/// Receives session progress so a front end can render it.
pub trait Presenter: Send + Sync {
    /// A question is about to be collected. `ordinal` is 1-based.
    fn on_question(&self, ordinal: usize, record: &Record);

    /// An answer was submitted (or input ended) for the question.
    fn on_answer(&self, ordinal: usize, correct: bool);

    /// The session deadline fired while the question was pending.
    fn on_timeout(&self, ordinal: usize);
}

/// Presenter that renders nothing.
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn on_question(&self, _: usize, _: &Record) {}
    fn on_answer(&self, _: usize, _: bool) {}
    fn on_timeout(&self, _: usize) {}
}
