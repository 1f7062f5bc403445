use anyhow::{Context, Result};
use tracing::info;

use chrome_export::{cli, extract, locator, logging, report, snapshot};

fn main() -> Result<()> {
    logging::init_logging();

    let opts = cli::parse();

    let input = locator::resolve_input(opts.input_file.clone())?;
    info!("reading history from {}", input.display());

    let snap = snapshot::Snapshot::create(&input)?;
    let visits = extract::read_visits(snap.db_path(), &input)?;
    info!("extracted {} titled visits", visits.len());

    let groups = report::group_visits(&visits);
    let html = report::render(&groups);
    std::fs::write(&opts.output_file, html)
        .with_context(|| format!("failed to write report to {}", opts.output_file.display()))?;

    info!("wrote report to {}", opts.output_file.display());
    Ok(())
}
