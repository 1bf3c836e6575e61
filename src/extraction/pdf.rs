//! PDF text extraction using lopdf.

use lopdf::Document;
use tracing::debug;

use crate::error::{Result, SummarizerError};

/// Extract text from PDF bytes.
///
/// Pages are read in page-number order; each page that yields text is
/// appended followed by a newline. Pages without text are skipped.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(pdf_bytes)
        .map_err(|e| SummarizerError::Extraction(format!("Failed to load PDF: {}", e)))?;

    let pages = doc.get_pages();
    let mut text = String::new();

    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            // lopdf ends every page with a newline, even an empty one
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(page_text.trim_end());
                text.push('\n');
            }
            Ok(_) => debug!(page = page_num, "PDF page has no text"),
            Err(e) => debug!(page = page_num, error = %e, "Skipping unreadable PDF page"),
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use pretty_assertions::assert_eq;

    /// Build a PDF with one page per entry; `None` pages draw no text.
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for (i, page) in pages.iter().enumerate() {
            let operations = match page {
                Some(line) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
                // alternate between an empty text block and no operators at all
                None if i % 2 == 0 => vec![Operation::new("BT", vec![]), Operation::new("ET", vec![])],
                None => vec![],
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages.len() as i64,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_pages_joined_and_blank_pages_skipped() {
        let pdf = build_pdf(&[Some("Hello"), None, None, Some("World")]);
        assert_eq!(extract_text(&pdf).unwrap(), "Hello\nWorld\n");
    }

    #[test]
    fn test_all_blank_pages_yield_no_text() {
        let pdf = build_pdf(&[None, None]);
        assert_eq!(extract_text(&pdf).unwrap(), "");
    }

    #[test]
    fn test_invalid_pdf_is_extraction_error() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, SummarizerError::Extraction(_)));
    }
}
