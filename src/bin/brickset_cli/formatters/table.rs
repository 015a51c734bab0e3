use anyhow::Result;
use brickset::{Query, QueryResult};
use colored::*;
use prettytable::{Cell, Row, Table};
use crate::formatters::Formatter;

/// Table formatter
pub struct TableFormatter {
    /// Whether colors are enabled
    colored: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        TableFormatter {
            colored: true,
        }
    }

    /// Disable colors
    #[cfg(test)]
    pub fn without_colors() -> Self {
        TableFormatter {
            colored: false,
        }
    }
}

fn header(titles: &[&str]) -> Row {
    Row::new(titles.iter().map(|title| Cell::new(title).style_spec("b")).collect())
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Formatter for TableFormatter {
    fn format_result(&self, query: &Query, result: &QueryResult) -> Result<String> {
        let mut table = Table::new();

        match result {
            QueryResult::Count(_) | QueryResult::Exists(_) | QueryResult::Total(_) => {
                table.set_titles(header(&["Query", "Result"]));
                table.add_row(Row::new(vec![
                    Cell::new(&query.to_string()),
                    Cell::new(&result.to_string()),
                ]));
            },
            QueryResult::Tags(tags) => {
                table.set_titles(header(&["#", "Tag"]));
                for (i, tag) in tags.iter().enumerate() {
                    table.add_row(Row::new(vec![
                        Cell::new(&(i + 1).to_string()),
                        Cell::new(tag),
                    ]));
                }
            },
            QueryResult::Partition(groups) => {
                let threshold = match query {
                    Query::PartitionPieces(threshold) => threshold.to_string(),
                    _ => "threshold".to_string(),
                };
                let title = format!("> {}", threshold);
                table.set_titles(header(&[title.as_str(), "Pieces"]));
                for (bigger, values) in groups.iter().rev() {
                    table.add_row(Row::new(vec![
                        Cell::new(&bigger.to_string()),
                        Cell::new(&join(values)),
                    ]));
                }
            },
            QueryResult::Packaging(counts) => {
                table.set_titles(header(&["Packaging type", "Sets"]));
                for (packaging, count) in counts {
                    table.add_row(Row::new(vec![
                        Cell::new(packaging.display_name()),
                        Cell::new(&count.to_string()).style_spec("r"),
                    ]));
                }
            },
        }

        Ok(table.to_string())
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
