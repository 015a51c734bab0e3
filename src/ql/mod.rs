//! Query language for brickset
//!
//! Lets the repository's queries be written as text, e.g.
//! `count_tag("Microscale")` or `partition_pieces(250)`, so they can be
//! issued from the command line or the interactive shell.

pub mod ast;
pub mod parser;
pub mod executor;

use crate::core::errors::Result;
use crate::lego_set_repository::LegoSetRepository;

pub use ast::Query;
pub use executor::{execute_query, QueryResult};
pub use parser::parse_query;

/// Execute a query string on the given repository
pub fn execute(repository: &LegoSetRepository, query_str: &str) -> Result<QueryResult> {
    // Parse the query
    let query = parser::parse_query(query_str)?;

    Ok(executor::execute_query(repository, &query))
}
