//! Minimal native PDF generation: enough of the format to lay out text and
//! simple vector graphics on A4 pages and serialize the result.
//!
//! The layer is split the usual way: [`objects`] holds the primitive object
//! model, [`Page`] accumulates content-stream operators through its
//! [`GraphicsContext`] and [`TextContext`], and [`PdfWriter`] serializes a
//! [`Document`] with xref table and trailer.

pub mod font;
pub mod graphics;
pub mod objects;
pub mod page;
pub mod text;
pub mod writer;

pub use font::{measure_text, Font};
pub use graphics::{Color, GraphicsContext};
pub use page::Page;
pub use text::TextContext;
pub use writer::PdfWriter;

use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Document information written to the PDF Info dictionary.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            producer: Some(format!("vitae v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(Utc::now()),
        }
    }
}

/// A PDF document: an ordered list of pages plus metadata.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pages: Vec<Page>,
    metadata: Metadata,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Serializes the whole document into memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        PdfWriter::new(&mut buffer).write_document(self)?;
        Ok(buffer)
    }

    /// Renders the document in memory and then writes it to `path` in one
    /// step. Nothing is written when rendering fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
