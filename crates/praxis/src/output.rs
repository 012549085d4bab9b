//! Terminal output utilities

use console::style;

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_write_without_panicking() {
        error("something went wrong");
        header("Section");
        kv("key", "value");
    }
}
