use crate::domain::constants::{NOT_FOUND, REPORT_RULE, REPORT_TITLE};
use crate::domain::models::{DocumentOutcome, DocumentReport, Outcome};

/// Title and document count printed before the first block.
pub fn render_header(total: usize) -> String {
    format!(
        "{}\n{} MSDS files found in the directory\n\n",
        REPORT_TITLE, total
    )
}

/// One document block, terminated by a blank line.
pub fn render_outcome(doc: &DocumentOutcome, total: usize) -> String {
    let mut lines = vec![
        format!("File: {} ({}/{})", doc.file, doc.index, total),
        REPORT_RULE.to_string(),
    ];
    match &doc.outcome {
        Outcome::Ok { report } => lines.extend(report_lines(report)),
        Outcome::Failed { error } => lines.push(format!("Error: {}", error)),
    }
    format!("{}\n\n", lines.join("\n"))
}

fn report_lines(r: &DocumentReport) -> Vec<String> {
    let mut lines = vec![
        format!("Compound name: {}", r.name.as_deref().unwrap_or(NOT_FOUND)),
        format!("Compound CAS: {}", r.cas.as_deref().unwrap_or(NOT_FOUND)),
        format!("Particularly hazardous: {}", yes_no(r.hazardous)),
        format!("CMR chemical: {}", yes_no(r.cmr)),
    ];
    if r.cmr {
        lines.push(format!("CMR H-phrases: {}", r.cmr_codes.join(", ")));
    }
    lines.push(format!("Other major risk chemical: {}", yes_no(r.other_risk)));
    if r.other_risk {
        lines.push(format!("Other H-phrases: {}", r.other_codes.join(", ")));
    }
    lines
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
