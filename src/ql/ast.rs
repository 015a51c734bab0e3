//! Abstract Syntax Tree for the brickset query language
//!
//! This module defines the structures that represent a parsed query.

use std::fmt;

/// A literal argument of a call
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A quoted string
    String(String),
    /// A signed integer
    Integer(i64),
    /// The `null` keyword
    Null,
}

impl Argument {
    /// Get a string representation of the argument's type
    pub fn type_name(&self) -> &'static str {
        match self {
            Argument::String(_) => "string",
            Argument::Integer(_) => "integer",
            Argument::Null => "null",
        }
    }
}

/// One of the queries the repository answers
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Number of sets carrying a tag
    CountWithTag(String),
    /// Whether some set has exactly this name (`None` looks for unnamed sets)
    NameExists(Option<String>),
    /// Distinct tags, descending
    TagsDescending,
    /// Sum of all piece counts
    TotalPieces,
    /// Distinct piece counts split around a threshold
    PartitionPieces(i64),
    /// Number of sets per packaging type
    PackagingFrequency,
}

impl Query {
    /// Function name of the query in the query language
    pub fn function_name(&self) -> &'static str {
        match self {
            Query::CountWithTag(_) => "count_tag",
            Query::NameExists(_) => "name_exists",
            Query::TagsDescending => "tags_desc",
            Query::TotalPieces => "total_pieces",
            Query::PartitionPieces(_) => "partition_pieces",
            Query::PackagingFrequency => "packaging_types",
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}

/// Format a query in its canonical call form, which parses back to itself
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function_name())?;
        match self {
            Query::CountWithTag(tag) => write_quoted(f, tag)?,
            Query::NameExists(Some(name)) => write_quoted(f, name)?,
            Query::NameExists(None) => write!(f, "null")?,
            Query::PartitionPieces(threshold) => write!(f, "{}", threshold)?,
            Query::TagsDescending | Query::TotalPieces | Query::PackagingFrequency => {}
        }
        write!(f, ")")
    }
}
