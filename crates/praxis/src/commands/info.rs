//! Info command

use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::InfoArgs;
use crate::output;

/// Row in the capability table
#[derive(Tabled, serde::Serialize, serde::Deserialize)]
pub struct CapabilityRow {
    category: String,
    tools: String,
    status: String,
}

impl CapabilityRow {
    fn new(category: &str, tools: &str) -> Self {
        Self {
            category: category.to_string(),
            tools: tools.to_string(),
            status: "✓".to_string(),
        }
    }
}

/// The capabilities this project demonstrates
pub fn capabilities() -> Vec<CapabilityRow> {
    vec![
        CapabilityRow::new("Testing", "cargo test, serial_test"),
        CapabilityRow::new("Code Quality", "rustfmt, clippy"),
        CapabilityRow::new("CLI", "clap, tabled, console"),
        CapabilityRow::new("Logging", "tracing, tracing-subscriber"),
        CapabilityRow::new("Documentation", "rustdoc"),
    ]
}

pub fn run(args: InfoArgs) -> Result<()> {
    let rows = capabilities();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        output::header("Rust Best Practices");

        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("{}", table);
    }

    Ok(())
}
