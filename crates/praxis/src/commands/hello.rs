//! Hello command

use anyhow::Result;
use console::style;

use crate::cli::HelloArgs;

pub fn run(args: HelloArgs) -> Result<()> {
    println!("{}", style(greeting(&args.name)).green());
    Ok(())
}

/// Format the greeting for a name
fn greeting(name: &str) -> String {
    format!("Hello {name}!")
}
