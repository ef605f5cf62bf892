use crate::domain::models::{DocumentOutcome, DocumentReport, Outcome};
use crate::services::document::{read_pages, PdfDocument, ScanError};
use crate::services::fields::parse_first_page;
use crate::services::hazards::{classify, scan_hazard_codes};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Runs the whole pipeline for one file. Failures are captured in the outcome.
pub fn scan_file(path: &Path, index: usize) -> DocumentOutcome {
    let file = display_name(path);
    let read = || PdfDocument::open(path).and_then(|doc| read_pages(&doc));
    let outcome = match read_isolated(read) {
        Ok(pages) => {
            tracing::debug!(file = %file, pages = pages.len(), "extracted page text");
            Outcome::Ok {
                report: analyze_pages(&pages),
            }
        }
        Err(e) => {
            tracing::warn!(file = %file, error = %e, "document could not be read");
            Outcome::Failed {
                error: e.to_string(),
            }
        }
    };
    DocumentOutcome {
        file,
        index,
        outcome,
    }
}

/// Runs `read` with lopdf panics turned into [`ScanError::Parser`].
///
/// The panic hook is muted meanwhile so nothing lands on the terminal.
fn read_isolated<T>(read: impl FnOnce() -> Result<T, ScanError>) -> Result<T, ScanError> {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(read));
    panic::set_hook(hook);
    result.unwrap_or_else(|payload| Err(ScanError::Parser(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

pub fn analyze_pages<S: AsRef<str>>(pages: &[S]) -> DocumentReport {
    let fields = pages
        .first()
        .map(|p| parse_first_page(p.as_ref()))
        .unwrap_or_default();
    let codes = scan_hazard_codes(pages);
    let classification = classify(&codes);
    DocumentReport::new(fields, codes, classification)
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
