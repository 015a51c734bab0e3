pub mod formatter;
pub mod text;
pub mod json;
pub mod table;

pub use formatter::Formatter;
use clap::ValueEnum;

use self::json::JsonFormatter;
use self::table::TableFormatter;
use self::text::TextFormatter;

/// Available output formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,

    /// JSON
    Json,

    /// Table
    Table,
}

impl OutputFormat {
    /// Build the formatter for this format
    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Table => Box::new(TableFormatter::new()),
        }
    }
}
