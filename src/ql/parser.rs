//! Parser for the brickset query language
//!
//! This module turns query strings into a [`Query`].

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::core::errors::{Result, RepositoryError};
use crate::ql::ast::{Argument, Query};

#[derive(Parser)]
#[grammar = "ql/grammar.pest"]
pub struct BricksetQLParser;

pub fn parse_query(input: &str) -> Result<Query> {
    let mut pairs = BricksetQLParser::parse(Rule::main, input)
        .map_err(|e| RepositoryError::Query(format!("Parse error: {}", e)))?;

    let call = pairs
        .next()
        .and_then(|main| main.into_inner().find(|p| p.as_rule() == Rule::call))
        .ok_or_else(|| RepositoryError::Query("Empty query".to_string()))?;

    parse_call(call)
}

fn parse_call(pair: Pair<Rule>) -> Result<Query> {
    let mut inner = pair.into_inner();
    let name = inner
        .next()
        .ok_or_else(|| RepositoryError::Query("Missing function name".to_string()))?
        .as_str()
        .to_ascii_lowercase();

    let arguments = inner.map(parse_argument).collect::<Result<Vec<_>>>()?;

    build_query(&name, arguments)
}

fn parse_argument(pair: Pair<Rule>) -> Result<Argument> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| RepositoryError::Query("Empty argument".to_string()))?;

    match inner.as_rule() {
        Rule::string => {
            let raw = inner.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            Ok(Argument::String(unescape(raw)))
        },
        Rule::integer => {
            let text = inner.as_str();
            text.parse::<i64>()
                .map(Argument::Integer)
                .map_err(|_| RepositoryError::Query(format!("Invalid integer: {}", text)))
        },
        Rule::null => Ok(Argument::Null),
        rule => Err(RepositoryError::Query(format!("Unexpected argument type: {:?}", rule))),
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }
    out
}

fn expect_arity(name: &str, arguments: &[Argument], expected: usize) -> Result<()> {
    if arguments.len() != expected {
        return Err(RepositoryError::Query(format!(
            "{} takes {} argument(s), got {}",
            name,
            expected,
            arguments.len()
        )));
    }
    Ok(())
}

fn type_mismatch(name: &str, expected: &str, got: &Argument) -> RepositoryError {
    RepositoryError::Query(format!(
        "{} expects {}, got {}",
        name,
        expected,
        got.type_name()
    ))
}

fn build_query(name: &str, mut arguments: Vec<Argument>) -> Result<Query> {
    match name {
        "count_tag" => {
            expect_arity(name, &arguments, 1)?;
            match arguments.remove(0) {
                Argument::String(tag) => Ok(Query::CountWithTag(tag)),
                other => Err(type_mismatch(name, "a string", &other)),
            }
        },
        "name_exists" => {
            expect_arity(name, &arguments, 1)?;
            match arguments.remove(0) {
                Argument::String(value) => Ok(Query::NameExists(Some(value))),
                Argument::Null => Ok(Query::NameExists(None)),
                other => Err(type_mismatch(name, "a string or null", &other)),
            }
        },
        "partition_pieces" => {
            expect_arity(name, &arguments, 1)?;
            match arguments.remove(0) {
                Argument::Integer(threshold) => Ok(Query::PartitionPieces(threshold)),
                other => Err(type_mismatch(name, "an integer", &other)),
            }
        },
        "tags_desc" => {
            expect_arity(name, &arguments, 0)?;
            Ok(Query::TagsDescending)
        },
        "total_pieces" => {
            expect_arity(name, &arguments, 0)?;
            Ok(Query::TotalPieces)
        },
        "packaging_types" => {
            expect_arity(name, &arguments, 0)?;
            Ok(Query::PackagingFrequency)
        },
        _ => Err(RepositoryError::Query(format!("Unknown function: {}", name))),
    }
}
