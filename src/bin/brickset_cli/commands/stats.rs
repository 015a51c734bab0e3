use anyhow::Result;
use brickset::Query;
use brickset::ql::execute_query;
use crate::context::Context;

/// Print the number of loaded sets and the packaging breakdown
pub fn execute(context: &mut Context) -> Result<()> {
    let repository = context.repository();
    let untagged = repository.get_all().iter().filter(|set| set.tags.is_none()).count();

    println!("{}", context.formatter().format_info(&format!(
        "{} sets loaded from {} ({} without tags)",
        repository.len(),
        context.source(),
        untagged
    )));

    let query = Query::PackagingFrequency;
    let result = execute_query(repository, &query);
    println!("{}", context.formatter().format_result(&query, &result)?);

    Ok(())
}
