//! The `timequiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing("timequiz.toml", SAMPLE_CONFIG)?;
    write_if_missing("problems.csv", EXAMPLE_PROBLEMS)?;

    println!("\nNext steps:");
    println!("  1. Edit problems.csv with your own questions");
    println!("  2. Run: timequiz validate");
    println!("  3. Run: timequiz --limit 30");

    Ok(())
}

fn write_if_missing(name: &str, content: &str) -> Result<()> {
    if Path::new(name).exists() {
        println!("{name} already exists, skipping.");
    } else {
        std::fs::write(name, content)?;
        println!("Created {name}");
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# timequiz configuration

# CSV file of question,answer rows (no header row)
csv = "problems.csv"

# Time limit for the whole quiz in seconds; 0 disables it
limit = 30

# Final score format: "text" or "json"
format = "text"
"#;

const EXAMPLE_PROBLEMS: &str = "5+5,10
7+3,10
1+1,2
8+3,11
1+2,3
8+6,14
3+1,4
1+4,5
5+1,6
2+3,5
3+3,6
2+4,6
5+2,7
\"what 2+2, sir?\",4
";
