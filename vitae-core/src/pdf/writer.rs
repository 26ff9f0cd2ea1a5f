//! Low-level PDF serialization: objects, xref table and trailer.

use crate::error::Result;
use crate::pdf::font::{escape_literal_string, Font};
use crate::pdf::objects::{Dictionary, Object, ObjectId};
use crate::pdf::page::Page;
use crate::pdf::{Document, Metadata};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::Write;

pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: BTreeMap<ObjectId, u64>,
    current_position: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            xref_positions: BTreeMap::new(),
            current_position: 0,
        }
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        self.write_header()?;

        let catalog_id = ObjectId::new(1, 0);
        let pages_id = ObjectId::new(2, 0);
        // Each page takes two objects: the page dictionary and its content
        // stream. The info dictionary follows them.
        let info_id = ObjectId::new(3 + 2 * document.pages().len() as u32, 0);

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name("Catalog".to_string()));
        catalog.set("Pages", pages_id);
        self.write_object(catalog_id, &Object::Dictionary(catalog))?;

        self.write_page_tree(pages_id, document.pages())?;
        self.write_info(info_id, document.metadata())?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(catalog_id, info_id, xref_position)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.7\n")?;
        // Binary comment so transports treat the file as binary.
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_page_tree(&mut self, pages_id: ObjectId, pages: &[Page]) -> Result<()> {
        let page_id = |i: u32| ObjectId::new(3 + 2 * i, 0);
        let content_id = |i: u32| ObjectId::new(4 + 2 * i, 0);

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name("Pages".to_string()));
        pages_dict.set("Count", pages.len() as i64);
        let kids: Vec<Object> = (0..pages.len() as u32)
            .map(|i| Object::Reference(page_id(i)))
            .collect();
        pages_dict.set("Kids", kids);
        self.write_object(pages_id, &Object::Dictionary(pages_dict))?;

        for (i, page) in pages.iter().enumerate() {
            let i = i as u32;
            self.write_page(page_id(i), pages_id, content_id(i), page)?;
            self.write_page_content(content_id(i), page)?;
        }
        Ok(())
    }

    fn write_page(
        &mut self,
        page_id: ObjectId,
        parent_id: ObjectId,
        content_id: ObjectId,
        page: &Page,
    ) -> Result<()> {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name("Page".to_string()));
        page_dict.set("Parent", parent_id);
        page_dict.set(
            "MediaBox",
            vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width()),
                Object::Real(page.height()),
            ],
        );
        page_dict.set("Contents", content_id);

        let mut font_dict = Dictionary::new();
        for font in Font::ALL {
            let mut entry = Dictionary::new();
            entry.set("Type", Object::Name("Font".to_string()));
            entry.set("Subtype", Object::Name("Type1".to_string()));
            entry.set("BaseFont", Object::Name(font.pdf_name().to_string()));
            entry.set("Encoding", Object::Name("WinAnsiEncoding".to_string()));
            font_dict.set(font.resource_name(), entry);
        }
        let mut resources = Dictionary::new();
        resources.set("Font", font_dict);
        page_dict.set("Resources", resources);

        self.write_object(page_id, &Object::Dictionary(page_dict))
    }

    #[cfg(feature = "compression")]
    fn write_page_content(&mut self, content_id: ObjectId, page: &Page) -> Result<()> {
        use crate::error::VitaeError;
        use flate2::write::ZlibEncoder;
        use flate2::Compression;

        let content = page.generate_content();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&content)
            .and_then(|_| encoder.finish())
            .map_err(|e| VitaeError::CompressionError(e.to_string()))
            .and_then(|compressed| {
                let mut stream_dict = Dictionary::new();
                stream_dict.set("Length", compressed.len() as i64);
                stream_dict.set("Filter", Object::Name("FlateDecode".to_string()));
                self.write_object(content_id, &Object::Stream(stream_dict, compressed))
            })
    }

    #[cfg(not(feature = "compression"))]
    fn write_page_content(&mut self, content_id: ObjectId, page: &Page) -> Result<()> {
        let content = page.generate_content();
        let mut stream_dict = Dictionary::new();
        stream_dict.set("Length", content.len() as i64);
        self.write_object(content_id, &Object::Stream(stream_dict, content))
    }

    fn write_info(&mut self, info_id: ObjectId, metadata: &Metadata) -> Result<()> {
        let mut info = Dictionary::new();
        if let Some(ref title) = metadata.title {
            info.set("Title", title.clone());
        }
        if let Some(ref author) = metadata.author {
            info.set("Author", author.clone());
        }
        if let Some(ref producer) = metadata.producer {
            info.set("Producer", producer.clone());
        }
        if let Some(creation_date) = metadata.creation_date {
            info.set("CreationDate", format_pdf_date(creation_date));
        }
        self.write_object(info_id, &Object::Dictionary(info))
    }

    fn write_object(&mut self, id: ObjectId, object: &Object) -> Result<()> {
        self.xref_positions.insert(id, self.current_position);

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;
        self.write_object_value(object)?;
        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Null => self.write_bytes(b"null")?,
            Object::Boolean(b) => self.write_bytes(if *b { b"true" } else { b"false" })?,
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(
                format!("{f:.6}")
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .as_bytes(),
            )?,
            Object::String(s) => {
                self.write_bytes(b"(")?;
                self.write_bytes(escape_literal_string(s).as_bytes())?;
                self.write_bytes(b")")?;
            }
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b"\n/")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Stream(dict, data) => {
                self.write_object_value(&Object::Dictionary(dict.clone()))?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => {
                self.write_bytes(id.to_string().as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        self.write_bytes(b"xref\n")?;
        self.write_bytes(format!("0 {}\n", max_obj_num + 1).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;

        for obj_num in 1..=max_obj_num {
            match self.xref_positions.get(&ObjectId::new(obj_num, 0)) {
                Some(position) => {
                    let entry = format!("{position:010} 00000 n \n");
                    self.write_bytes(entry.as_bytes())?;
                }
                None => self.write_bytes(b"0000000000 00000 f \n")?,
            }
        }
        Ok(())
    }

    fn write_trailer(
        &mut self,
        catalog_id: ObjectId,
        info_id: ObjectId,
        xref_position: u64,
    ) -> Result<()> {
        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        let mut trailer = Dictionary::new();
        trailer.set("Size", (max_obj_num + 1) as i64);
        trailer.set("Root", catalog_id);
        trailer.set("Info", info_id);

        self.write_bytes(b"trailer\n")?;
        self.write_object_value(&Object::Dictionary(trailer))?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

/// Formats a timestamp as a PDF date string (D:YYYYMMDDHHmmSS+00'00).
fn format_pdf_date(date: DateTime<Utc>) -> String {
    format!("{}+00'00", date.format("D:%Y%m%d%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn render(document: &Document) -> Vec<u8> {
        let mut buffer = Vec::new();
        PdfWriter::new(&mut buffer)
            .write_document(document)
            .unwrap();
        buffer
    }

    #[test]
    fn test_header_and_trailer_markers() {
        let mut document = Document::new();
        document.add_page(Page::a4());
        let bytes = render(&document);

        assert!(bytes.starts_with(b"%PDF-1.7\n"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_page_count_in_page_tree() {
        let mut document = Document::new();
        document.add_page(Page::a4());
        document.add_page(Page::a4());
        document.add_page(Page::a4());
        let text = String::from_utf8_lossy(&render(&document)).to_string();

        assert!(text.contains("/Count 3"));
        assert_eq!(text.matches("/Type /Page\n").count(), 3);
    }

    #[test]
    fn test_font_resources_present() {
        let mut document = Document::new();
        document.add_page(Page::a4());
        let text = String::from_utf8_lossy(&render(&document)).to_string();

        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
    }

    #[test]
    fn test_info_dictionary_written() {
        let mut document = Document::new();
        document.set_title("Jane Doe - Resume");
        document.metadata_mut().creation_date =
            Some(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
        document.add_page(Page::a4());
        let text = String::from_utf8_lossy(&render(&document)).to_string();

        assert!(text.contains("/Title (Jane Doe - Resume)"));
        assert!(text.contains("(D:20260102030405+00'00)"));
    }

    #[test]
    fn test_info_strings_escape_delimiters() {
        let mut document = Document::new();
        document.set_title("Jane (Doe - Resume");
        document.set_author("Back\\slash");
        document.add_page(Page::a4());
        let text = String::from_utf8_lossy(&render(&document)).to_string();

        assert!(text.contains("/Title (Jane \\(Doe - Resume)"));
        assert!(text.contains("/Author (Back\\\\slash)"));
    }

    #[test]
    fn test_xref_entry_count_matches_size() {
        let mut document = Document::new();
        document.add_page(Page::a4());
        let text = String::from_utf8_lossy(&render(&document)).to_string();

        // catalog, pages, page, content, info -> Size 6
        assert!(text.contains("/Size 6"));
        assert!(text.contains("xref\n0 6\n"));
    }

    #[test]
    fn test_format_pdf_date() {
        let date = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap();
        assert_eq!(format_pdf_date(date), "D:20241231235958+00'00");
    }
}
