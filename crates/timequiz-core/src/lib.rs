//! timequiz-core — Record parsing, answer collection, and scoring.
//!
//! This crate defines the quiz data model, the CSV parser, the deadline-aware
//! answer collector, and the session runner that the CLI drives.

pub mod collector;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod traits;

pub use error::QuizError;
pub use model::Record;
pub use report::{ReportFormat, ScoreReport, SessionOutcome};
pub use session::{QuizSession, SessionConfig, SessionPhase};
