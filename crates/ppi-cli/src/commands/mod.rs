//! CLI command implementations
//!
//! Each mode or subcommand has its own module with a `run` function.

pub mod analyze;
pub mod batch;
pub mod config;
pub mod demo;
pub mod interactive;
pub mod partners;

use colored::Colorize;

const RULE_WIDTH: usize = 70;

/// Print a cyan-ruled section header
pub(crate) fn print_section(title: &str) {
    println!();
    println!("{}", "-".repeat(RULE_WIDTH).cyan());
    println!("{}", title.bold());
    println!("{}", "-".repeat(RULE_WIDTH).cyan());
}

/// Truncate to `max_chars` characters, appending "..." when cut
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 80), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }
}
