use anyhow::Result;
use brickset::{Query, QueryResult};
use serde_json::json;
use crate::formatters::Formatter;

/// JSON formatter
pub struct JsonFormatter {
    /// Whether indentation is enabled
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        JsonFormatter {
            pretty: true,
        }
    }

    /// Disable indentation
    #[cfg(test)]
    pub fn without_pretty() -> Self {
        JsonFormatter {
            pretty: false,
        }
    }

    fn render(&self, value: &serde_json::Value) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }

    fn message(&self, key: &str, text: &str) -> String {
        let mut object = serde_json::Map::new();
        object.insert(key.to_string(), json!(text));
        self.render(&serde_json::Value::Object(object))
            .unwrap_or_else(|_| format!("{{\"{}\":\"{}\"}}", key, text))
    }
}

impl Formatter for JsonFormatter {
    fn format_result(&self, query: &Query, result: &QueryResult) -> Result<String> {
        let value = json!({
            "query": query.to_string(),
            "result": result.to_json(),
        });
        self.render(&value)
    }

    fn format_error(&self, error: &str) -> String {
        self.message("error", error)
    }

    fn format_info(&self, info: &str) -> String {
        self.message("info", info)
    }

    fn format_success(&self, success: &str) -> String {
        self.message("success", success)
    }
}
