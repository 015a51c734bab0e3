use anyhow::Result;
use brickset::{Query, QueryResult};
use colored::*;
use crate::formatters::Formatter;

/// Plain text formatter
pub struct TextFormatter {
    /// Whether colors are enabled
    colored: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        TextFormatter {
            colored: true,
        }
    }

    /// Disable colors
    #[cfg(test)]
    pub fn without_colors() -> Self {
        TextFormatter {
            colored: false,
        }
    }
}

impl Formatter for TextFormatter {
    fn format_result(&self, _query: &Query, result: &QueryResult) -> Result<String> {
        Ok(result.to_string())
    }

    fn format_error(&self, error: &str) -> String {
        if self.colored {
            format!("{}", error.red().bold())
        } else {
            format!("Error: {}", error)
        }
    }

    fn format_info(&self, info: &str) -> String {
        if self.colored {
            format!("{}", info.blue())
        } else {
            format!("Info: {}", info)
        }
    }

    fn format_success(&self, success: &str) -> String {
        if self.colored {
            format!("{}", success.green().bold())
        } else {
            format!("Success: {}", success)
        }
    }
}
