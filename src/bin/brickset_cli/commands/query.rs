use std::io::{self, Write};

use anyhow::Result;
use brickset::ql;
use crate::context::Context;

/// Run one query expression and print its result
pub fn execute(context: &mut Context, query: &str) -> Result<()> {
    let stdout = io::stdout();
    write_result(context, query, &mut stdout.lock())
}

/// Run one query expression and write its result, nothing for an empty one
pub fn write_result<W: Write>(context: &Context, query: &str, out: &mut W) -> Result<()> {
    let output = render(context, query)?;
    if !output.is_empty() {
        writeln!(out, "{}", output)?;
    }

    Ok(())
}

/// Parse, run and format a query expression
pub fn render(context: &Context, query: &str) -> Result<String> {
    let query = ql::parse_query(query)?;
    let result = ql::execute_query(context.repository(), &query);

    context.formatter().format_result(&query, &result)
}
