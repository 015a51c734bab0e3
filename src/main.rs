use std::io;

use log::info;

use brickset::{demo, LegoSetRepository};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load once, then run every sample query against the same collection
    let repository = LegoSetRepository::new()?;
    info!("Running sample queries over {} sets", repository.len());

    let stdout = io::stdout();
    demo::run(&repository, &mut stdout.lock())?;

    Ok(())
}
