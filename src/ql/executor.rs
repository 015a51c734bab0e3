//! Query executor for the brickset query language

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde_json::{json, Map, Value as JsonValue};

use crate::core::lego_set::PackagingType;
use crate::lego_set_repository::LegoSetRepository;
use crate::ql::ast::Query;

/// The result of one query, shaped after the query that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Count(u64),
    Exists(bool),
    Tags(Vec<String>),
    Total(String),
    Partition(BTreeMap<bool, Vec<u32>>),
    Packaging(BTreeMap<PackagingType, u64>),
}

impl QueryResult {
    /// Convert the result into a JSON value
    ///
    /// Partitions become an object with `"false"` and `"true"` keys,
    /// packaging counts an object keyed by packaging display name.
    pub fn to_json(&self) -> JsonValue {
        match self {
            QueryResult::Count(count) => json!(count),
            QueryResult::Exists(exists) => json!(exists),
            QueryResult::Tags(tags) => json!(tags),
            QueryResult::Total(total) => json!(total),
            QueryResult::Partition(groups) => {
                let object: Map<String, JsonValue> = groups
                    .iter()
                    .map(|(key, values)| (key.to_string(), json!(values)))
                    .collect();
                JsonValue::Object(object)
            },
            QueryResult::Packaging(counts) => {
                let object: Map<String, JsonValue> = counts
                    .iter()
                    .map(|(packaging, count)| (packaging.to_string(), json!(count)))
                    .collect();
                JsonValue::Object(object)
            },
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain text rendering; tags are one per line, packaging types by identifier
impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResult::Count(count) => write!(f, "{}", count),
            QueryResult::Exists(exists) => write!(f, "{}", exists),
            QueryResult::Tags(tags) => write!(f, "{}", tags.join("\n")),
            QueryResult::Total(total) => write!(f, "{}", total),
            QueryResult::Partition(groups) => {
                let entries: Vec<String> = groups
                    .iter()
                    .map(|(key, values)| format!("{}=[{}]", key, join(values)))
                    .collect();
                write!(f, "{{{}}}", entries.join(", "))
            },
            QueryResult::Packaging(counts) => {
                let entries: Vec<String> = counts
                    .iter()
                    .map(|(packaging, count)| format!("{}={}", packaging.identifier(), count))
                    .collect();
                write!(f, "{{{}}}", entries.join(", "))
            },
        }
    }
}

/// Execute a parsed query against the repository
pub fn execute_query(repository: &LegoSetRepository, query: &Query) -> QueryResult {
    debug!("Executing {} over {} sets", query, repository.len());

    match query {
        Query::CountWithTag(tag) => QueryResult::Count(repository.count_lego_sets_with_tag(tag)),
        Query::NameExists(name) => QueryResult::Exists(repository.name_exists(name.as_deref())),
        Query::TagsDescending => QueryResult::Tags(repository.tags_in_reverse_order()),
        Query::TotalPieces => QueryResult::Total(repository.sum_of_pieces()),
        Query::PartitionPieces(threshold) => QueryResult::Partition(repository.pieces_bigger_than(*threshold)),
        Query::PackagingFrequency => QueryResult::Packaging(repository.collect_packaging_type()),
    }
}
