//! First-page PDF text extraction using lopdf.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::{debug, error};

use super::Result;
use crate::error::PdfError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { document: None }
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Get the number of pages in the loaded PDF.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Extract text from a specific page (1-indexed).
    pub fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the plain text of the first page of the PDF at `path`.
///
/// Any failure (missing file, corrupt or encrypted PDF, no pages, extraction
/// error) is logged and collapses to an empty string. Callers must treat the
/// empty string as "no usable text", never as a zero-length valid document.
pub fn first_page_text(path: &Path) -> String {
    debug!("Opening PDF file: {}", path.display());

    match read_first_page(path) {
        Ok(text) => {
            debug!(
                "Successfully extracted text from the first page of {}",
                path.display()
            );
            text
        }
        Err(e) => {
            error!("Failed to extract text from {}: {}", path.display(), e);
            String::new()
        }
    }
}

fn read_first_page(path: &Path) -> crate::error::Result<String> {
    let data = fs::read(path)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    Ok(extractor.extract_page_text(1)?)
}
