use crate::domain::constants::PDF_EXTENSION;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Lists the `.pdf` files directly inside `dir`, sorted by file name.
pub fn discover_documents(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("cannot list directory {}", dir.display()))?;
    let mut docs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_pdf_name(&path) {
            docs.push(path);
        }
    }
    docs.sort();
    tracing::info!(dir = %dir.display(), count = docs.len(), "discovered documents");
    Ok(docs)
}

fn is_pdf_name(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with(PDF_EXTENSION))
        .unwrap_or(false)
}
