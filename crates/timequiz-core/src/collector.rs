//! Answer collection, optionally bounded by a session deadline.

use tokio::time::Instant;

use crate::traits::AnswerSource;

/// Result of collecting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected {
    /// A line was submitted before the deadline.
    Answered(String),
    /// Input ended before a line arrived. Never scores.
    EndOfInput,
    /// The deadline passed first.
    TimedOut,
}

/// Collect a single answer.
///
/// Without a deadline this simply waits for the source. With one, the read
/// races the clock and whichever finishes first wins; a losing read is
/// dropped, not awaited.
pub async fn collect_answer(
    source: &mut dyn AnswerSource,
    deadline: Option<Instant>,
) -> Collected {
    let Some(deadline) = deadline else {
        return into_collected(source.next_answer().await);
    };

    tokio::select! {
        biased;
        answer = source.next_answer() => into_collected(answer),
        _ = tokio::time::sleep_until(deadline) => Collected::TimedOut,
    }
}

fn into_collected(answer: Option<String>) -> Collected {
    match answer {
        Some(text) => Collected::Answered(text),
        None => Collected::EndOfInput,
    }
}
