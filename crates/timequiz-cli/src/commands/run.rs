//! The `timequiz run` command (also the default).

use std::io::{self, Write};

use anyhow::{Context, Result};

use timequiz_console::{load_config_from, LineAnswers, QuizConfig};
use timequiz_core::parser;
use timequiz_core::traits::Presenter;
use timequiz_core::{QuizSession, Record};

use crate::RunArgs;

/// Writes prompts to stdout and leaves the cursor after them for typing.
struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn on_question(&self, ordinal: usize, record: &Record) {
        let mut out = io::stdout().lock();
        let _ = write!(out, "Problem #{ordinal}: {} = ", record.question());
        let _ = out.flush();
    }

    fn on_answer(&self, _ordinal: usize, _correct: bool) {}

    fn on_timeout(&self, _ordinal: usize) {
        // Finish the dangling prompt line before the score.
        println!();
    }
}

/// Merge command-line flags over the loaded config.
fn resolve_config(args: &RunArgs) -> Result<QuizConfig> {
    let mut config = load_config_from(args.config.as_deref())?;
    if let Some(csv) = &args.csv {
        config.csv = csv.clone();
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    Ok(config)
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    tracing::debug!(csv = %config.csv.display(), limit = config.limit, "resolved quiz config");

    // Fail on a bad file before any question is shown.
    let records = parser::load_records(&config.csv)?;

    let mut answers = LineAnswers::stdin().context("failed to start reading answers")?;
    let mut session = QuizSession::new(records, config.session_config());
    let report = session.run(&mut answers, &ConsolePresenter).await?;

    println!("{}", report.render(config.format)?);

    if let Some(path) = &args.output {
        report.save_json(path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}
