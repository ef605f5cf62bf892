use crate::services::scan::display_name;
use lopdf::Document;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("cannot open {file}: {source}")]
    Open {
        file: String,
        #[source]
        source: lopdf::Error,
    },
    #[error("document has no pages")]
    NoPages,
    #[error("page {page} out of range ({count} pages)")]
    PageOutOfRange { page: usize, count: usize },
    #[error("cannot extract text from page {page}: {source}")]
    PageText {
        page: u32,
        #[source]
        source: lopdf::Error,
    },
    #[error("PDF parser failed: {0}")]
    Parser(String),
}

/// Page-wise plain text of an opened document.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Text of the page at 0-based `index`.
    fn page_text(&self, index: usize) -> Result<String, ScanError>;
}

pub struct PdfDocument {
    doc: Document,
    // Page numbers as stored in the page tree, in physical order.
    pages: Vec<u32>,
}

impl PdfDocument {
    /// Parses the whole file; the handle is released before this returns.
    pub fn open(path: &Path) -> Result<Self, ScanError> {
        let doc = Document::load(path).map_err(|source| ScanError::Open {
            file: display_name(path),
            source,
        })?;
        let pages = doc.get_pages().keys().copied().collect();
        Ok(Self { doc, pages })
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ScanError> {
        let page = *self.pages.get(index).ok_or(ScanError::PageOutOfRange {
            page: index + 1,
            count: self.pages.len(),
        })?;
        self.doc
            .extract_text(&[page])
            .map_err(|source| ScanError::PageText { page, source })
    }
}

/// Text of every page, first page first.
pub fn read_pages(source: &impl PageSource) -> Result<Vec<String>, ScanError> {
    let count = source.page_count();
    if count == 0 {
        return Err(ScanError::NoPages);
    }
    (0..count).map(|i| source.page_text(i)).collect()
}
