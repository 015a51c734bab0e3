use anyhow::Result;
use brickset::{Query, QueryResult};

/// Trait defining an output formatter
pub trait Formatter {
    /// Format the result of a query for display
    fn format_result(&self, query: &Query, result: &QueryResult) -> Result<String>;

    /// Format an error message
    fn format_error(&self, error: &str) -> String;

    /// Format an informational message
    fn format_info(&self, info: &str) -> String;

    /// Format a success message
    fn format_success(&self, success: &str) -> String;
}
