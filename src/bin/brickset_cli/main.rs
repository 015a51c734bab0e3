mod app;
mod context;
mod commands;
mod formatters;
mod repl;

use anyhow::Result;

fn main() -> Result<()> {
    app::run()
}
