//! Line-oriented answer source backed by a reader thread.

use std::io::{self, BufRead, BufReader};
use std::thread;

use async_trait::async_trait;
use tokio::sync::mpsc;

use timequiz_core::traits::AnswerSource;

/// Answers read one line at a time from a blocking reader.
///
/// Reading happens on a detached OS thread that forwards each line over a
/// channel. The thread is never joined: when the session ends on a timeout,
/// a read still blocked on the terminal is simply left behind, and anything
/// it delivers later stays unread in the channel.
pub struct LineAnswers {
    rx: mpsc::UnboundedReceiver<String>,
}

impl LineAnswers {
    /// Read answers from standard input.
    pub fn stdin() -> io::Result<Self> {
        Self::spawn(BufReader::new(io::stdin()))
    }

    /// Read answers from any buffered reader.
    pub fn spawn<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::Builder::new()
            .name("timequiz-input".into())
            .spawn(move || forward_lines(reader, tx))?;
        Ok(Self { rx })
    }
}

fn forward_lines<R: BufRead>(mut reader: R, tx: mpsc::UnboundedSender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = strip_line_ending(&String::from_utf8_lossy(&buf)).to_string();
                if tx.send(line).is_err() {
                    // Session is over and the receiver is gone.
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!("stopped reading answers: {e}");
                break;
            }
        }
    }
    tracing::debug!("answer input closed");
}

/// Remove a trailing `\n` or `\r\n`, nothing else.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[async_trait]
impl AnswerSource for LineAnswers {
    async fn next_answer(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use timequiz_core::collector::{collect_answer, Collected};

    use super::*;

    #[test]
    fn strips_only_line_endings() {
        assert_eq!(strip_line_ending("4\n"), "4");
        assert_eq!(strip_line_ending("4\r\n"), "4");
        assert_eq!(strip_line_ending(" 4 \n"), " 4 ");
        assert_eq!(strip_line_ending("4"), "4");
        assert_eq!(strip_line_ending("\n"), "");
    }

    #[tokio::test]
    async fn reads_lines_then_ends() {
        let mut answers = LineAnswers::spawn(Cursor::new("2\r\n Four\nlast")).unwrap();
        assert_eq!(answers.next_answer().await.as_deref(), Some("2"));
        assert_eq!(answers.next_answer().await.as_deref(), Some(" Four"));
        assert_eq!(answers.next_answer().await.as_deref(), Some("last"));
        assert_eq!(answers.next_answer().await, None);
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced_not_fatal() {
        let mut answers = LineAnswers::spawn(Cursor::new(b"\xff\nok\n".to_vec())).unwrap();
        assert_eq!(answers.next_answer().await.as_deref(), Some("\u{fffd}"));
        assert_eq!(answers.next_answer().await.as_deref(), Some("ok"));
    }

    /// A reader that blocks until its feed hangs up, like an idle terminal.
    struct Stalled(std::sync::mpsc::Receiver<()>);

    impl io::Read for Stalled {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            let _ = self.0.recv();
            Ok(0)
        }
    }

    #[tokio::test]
    async fn blocked_read_does_not_delay_timeout() {
        let (_hold, feed) = std::sync::mpsc::channel::<()>();
        let mut answers = LineAnswers::spawn(BufReader::new(Stalled(feed))).unwrap();

        let deadline = tokio::time::Instant::now() + Duration::from_millis(50);
        let got = tokio::time::timeout(
            Duration::from_secs(5),
            collect_answer(&mut answers, Some(deadline)),
        )
        .await
        .expect("collector must return at the deadline");
        assert_eq!(got, Collected::TimedOut);
    }
}
