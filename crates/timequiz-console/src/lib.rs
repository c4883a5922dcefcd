//! timequiz-console — Answer sources and configuration.
//!
//! Implements the `AnswerSource` trait over line-oriented input (stdin in
//! production, scripted answers in tests) and loads `timequiz.toml`.

pub mod config;
pub mod lines;
pub mod mock;

pub use config::{load_config_from, QuizConfig};
pub use lines::LineAnswers;
pub use mock::ScriptedAnswers;
