use crate::cli::Cli;
use crate::domain::models::ScanReport;
use crate::services::locator::discover_documents;
use crate::services::output::print_json;
use crate::services::report::{render_header, render_outcome};
use crate::services::scan::scan_file;
use std::io::Write;

pub fn handle_scan(cli: &Cli) -> anyhow::Result<()> {
    let files = discover_documents(&cli.dir)?;
    let total = files.len();

    if cli.json {
        let documents = files
            .iter()
            .enumerate()
            .map(|(i, path)| scan_file(path, i + 1))
            .collect();
        return print_json(ScanReport {
            directory: cli.dir.display().to_string(),
            found: total,
            documents,
        });
    }

    // Each block is written as soon as its document is done.
    let mut out = std::io::stdout().lock();
    write!(out, "{}", render_header(total))?;
    for (i, path) in files.iter().enumerate() {
        let outcome = scan_file(path, i + 1);
        write!(out, "{}", render_outcome(&outcome, total))?;
        out.flush()?;
    }
    Ok(())
}
