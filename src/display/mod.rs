//! Display formatting for terminal output
//!
//! Provides number formatting shared by the CLI and the TUI, and the
//! plain-text dashboard renderer.

pub mod format;
pub mod report;

pub use format::{format_bar, format_currency, format_number, format_percentage, format_threshold};
pub use report::{format_chart, format_dashboard};

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    if s.chars().count() >= width {
        s.to_string()
    } else {
        format!("{:>width$}", s, width = width)
    }
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }

    #[test]
    fn test_right_align() {
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(right_align("abcdef", 3), "abcdef");
    }
}
