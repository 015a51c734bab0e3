//! The fixed walk-through printed by the `brickset` binary
//!
//! Runs each query once with the sample arguments below and writes the
//! results, one query after the other, to the given sink.

use std::io::{self, Write};

use crate::lego_set_repository::LegoSetRepository;
use crate::ql::{execute_query, Query, QueryResult};

pub const SAMPLE_TAG: &str = "Microscale";
pub const SAMPLE_NAME: &str = "Heart";
pub const SAMPLE_THRESHOLD: i64 = 250;

/// The sample queries, in the order they are printed
pub fn sample_queries() -> Vec<Query> {
    vec![
        Query::CountWithTag(SAMPLE_TAG.to_string()),
        Query::NameExists(Some(SAMPLE_NAME.to_string())),
        Query::TagsDescending,
        Query::TotalPieces,
        Query::PartitionPieces(SAMPLE_THRESHOLD),
        Query::PackagingFrequency,
    ]
}

/// Run every sample query and write its plain text result
pub fn run<W: Write>(repository: &LegoSetRepository, out: &mut W) -> io::Result<()> {
    for query in sample_queries() {
        match execute_query(repository, &query) {
            // one line per tag, nothing at all when there is no tag
            QueryResult::Tags(tags) => {
                for tag in tags {
                    writeln!(out, "{}", tag)?;
                }
            },
            result => writeln!(out, "{}", result)?,
        }
    }
    Ok(())
}
