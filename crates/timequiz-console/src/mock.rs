//! Scripted answer source for testing.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use timequiz_core::traits::AnswerSource;

/// A canned answer and how long after the previous one it is "typed".
#[derive(Debug, Clone)]
pub struct ScriptedLine {
    pub delay: Duration,
    pub text: String,
}

/// An answer source that replays a fixed script, for driving sessions
/// without a terminal.
///
/// Delays run on the tokio clock, so paused-time tests stay deterministic.
/// A pending delay survives cancellation: if the collector gives up on a
/// line, asking again resumes the same countdown instead of restarting it.
pub struct ScriptedAnswers {
    lines: VecDeque<ScriptedLine>,
    /// When the front line becomes available, once someone has waited on it.
    ready_at: Option<Instant>,
    /// Whether to block forever once the script runs out, instead of
    /// reporting end of input.
    hang_when_done: bool,
    call_count: u32,
}

impl ScriptedAnswers {
    pub fn new(lines: impl IntoIterator<Item = ScriptedLine>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            ready_at: None,
            hang_when_done: false,
            call_count: 0,
        }
    }

    /// Answers that are all available immediately.
    pub fn immediate<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self::timed(answers.into_iter().map(|a| (Duration::ZERO, a)))
    }

    /// Answers each arriving `delay` after the previous one was requested.
    pub fn timed<S: Into<String>>(answers: impl IntoIterator<Item = (Duration, S)>) -> Self {
        Self::new(answers.into_iter().map(|(delay, text)| ScriptedLine {
            delay,
            text: text.into(),
        }))
    }

    /// Never signal end of input; wait forever after the last line, like a
    /// user who stopped typing.
    pub fn hang_when_done(mut self) -> Self {
        self.hang_when_done = true;
        self
    }

    /// Number of times an answer was requested.
    pub fn call_count(&self) -> u32 {
        self.call_count
    }

    /// Lines not yet delivered.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_answer(&mut self) -> Option<String> {
        self.call_count += 1;

        let Some(delay) = self.lines.front().map(|l| l.delay) else {
            if self.hang_when_done {
                std::future::pending::<()>().await;
            }
            return None;
        };

        let ready_at = *self.ready_at.get_or_insert_with(|| Instant::now() + delay);
        if ready_at > Instant::now() {
            tokio::time::sleep_until(ready_at).await;
        }

        self.ready_at = None;
        self.lines.pop_front().map(|l| l.text)
    }
}
