//! Package writer

use std::io::{Cursor, Write};

use zip::result::ZipError;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::document::Document;
use crate::models::ExportError;

use super::xml;

/// Serialize a built report into `.docx` bytes.
///
/// The archive is assembled entirely in memory; nothing touches the
/// filesystem or the network.
pub fn render(document: &Document) -> Result<Vec<u8>, ExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let main_part = xml::document_xml(document);
    let parts: [(&str, &str); 5] = [
        ("[Content_Types].xml", xml::CONTENT_TYPES),
        ("_rels/.rels", xml::PACKAGE_RELS),
        ("word/document.xml", &main_part),
        ("word/_rels/document.xml.rels", xml::DOCUMENT_RELS),
        ("word/styles.xml", xml::STYLES),
    ];

    for (name, content) in parts {
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes()).map_err(ZipError::Io)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Document};
    use std::io::Read;

    fn minimal_document() -> Document {
        Document {
            title: "Test Report".into(),
            blocks: vec![
                Block::Heading("Section".into()),
                Block::Paragraph("Body".into()),
            ],
        }
    }

    #[test]
    fn archive_contains_all_package_parts() {
        let bytes = render(&minimal_document()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part: {name}");
        }
    }

    #[test]
    fn main_part_round_trips_body_text() {
        let bytes = render(&minimal_document()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut content = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert!(content.contains("Test Report"));
        assert!(content.contains("Body"));
    }

    #[test]
    fn output_starts_with_zip_magic() {
        let bytes = render(&minimal_document()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
