use std::io;

use anyhow::Result;
use brickset::demo;
use crate::context::Context;
use crate::formatters::OutputFormat;

/// Run the sample queries
///
/// Plain text output is the fixed demo layout, other formats render
/// each result through the current formatter.
pub fn execute(context: &mut Context) -> Result<()> {
    if context.verbosity() > 0 {
        println!("{}", context.formatter().format_info(&format!(
            "{} sets loaded from {}",
            context.repository().len(),
            context.source()
        )));
    }

    if context.format() == OutputFormat::Text {
        let stdout = io::stdout();
        demo::run(context.repository(), &mut stdout.lock())?;
        return Ok(());
    }

    for query in demo::sample_queries() {
        let result = brickset::ql::execute_query(context.repository(), &query);
        println!("{}", context.formatter().format_result(&query, &result)?);
    }

    Ok(())
}
