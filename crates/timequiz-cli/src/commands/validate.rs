//! The `timequiz validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use timequiz_console::load_config_from;
use timequiz_core::parser;

pub fn execute(csv: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = csv.unwrap_or(config.csv);

    let records = parser::load_records(&path)?;
    println!("Quiz: {} ({} questions)", path.display(), records.len());

    if !records.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["#", "Question", "Answer"]);
        for (i, record) in records.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(record.question()),
                Cell::new(record.expected_answer()),
            ]);
        }
        println!("{table}");
    }

    let warnings = parser::validate_records(&records);
    for w in &warnings {
        println!("  [row {}] WARNING: {}", w.row, w.message);
    }

    if warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
